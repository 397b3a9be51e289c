mod exec;
mod setup;

pub use self::exec::ExecError;
pub use self::setup::SetupError;
