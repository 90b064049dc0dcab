mod context;
mod flags;
mod help;
mod parse;
mod prompts;

pub use context::{Context, Exit};
pub use flags::CliFlags;
pub use parse::parse;

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Try --help");
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Exit::Done) => 0,
        Err(Exit::Failed(e)) => {
            prompts::error_chain(&e);
            1
        }
        Err(Exit::Output { target, source }) => {
            prompts::error(&format!("Failed to write {}: {}", target, source));
            1
        }
    }
}
