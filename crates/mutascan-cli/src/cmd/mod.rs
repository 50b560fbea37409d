pub mod batch;
pub mod check;
pub mod generate;

/// Process exit codes shared by the subcommands.
pub const EXIT_MUTANT: u8 = 0;
pub const EXIT_HUMAN: u8 = 1;
pub const EXIT_INVALID: u8 = 2;
