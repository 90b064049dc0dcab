//! CLI context - bundles settings, flags, and the generator.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, help, prompts};
use crate::settings::Settings;
use genpass::PasswordGenerator;

const DEFAULT_OUTPUT: &str = "genpass.txt";

/// Why `run` stopped early.
#[derive(Debug)]
pub enum Exit {
    /// Nothing left to do, not an error.
    Done,
    Failed(genpass::Error),
    /// Passwords were generated but could not be written out.
    Output { target: String, source: io::Error },
}

impl From<genpass::Error> for Exit {
    fn from(e: genpass::Error) -> Self {
        Exit::Failed(e)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
    generator: PasswordGenerator,
}

impl Context {
    /// Parse arguments and resolve them against saved defaults.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        prompts::set_quiet(flags.quiet);

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        let mut ctx = Self {
            settings,
            flags,
            clipboard: None,
            generator: PasswordGenerator::new(),
        };
        ctx.apply_flags();
        Ok(ctx)
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits.
    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        self.handle_save();
        self.handle_clipboard()?;
        self.generate_output()?;
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            help::print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("genpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(&crate::settings::path().display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), Exit> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Exit::Done);
                }
            }
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        let flags = &self.flags;
        let settings = &mut self.settings;
        let opts = &mut settings.options;

        if let Some(len) = flags.length {
            opts.length = len;
        }
        if let Some(num) = flags.number {
            settings.number_of_passwords = num;
        }
        if let Some(max) = flags.max_retries {
            opts.max_retries = Some(max);
        }

        if flags.no_lower {
            opts.lowercase = false;
        }
        if flags.no_upper {
            opts.uppercase = false;
        }
        opts.numbers |= flags.numbers;
        opts.symbols |= flags.symbols;
        opts.exclude_similar_characters |= flags.similar;
        opts.strict |= flags.strict;

        if let Some(ref chars) = flags.special {
            opts.symbols_string = chars.clone();
            opts.symbols = true;
        }
        if let Some(ref chars) = flags.exclude {
            opts.exclude = chars.clone();
        }

        if let Some(ref path) = flags.output {
            settings.output_file_path = output_path(path);
        }
    }

    /// Generate passwords and write them to the clipboard, a file or stdout.
    pub fn generate_output(&mut self) -> Result<(), Exit> {
        let count = self.settings.number_of_passwords;
        let mut passwords = self
            .generator
            .generate_multiple(count, &self.settings.options)?;

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut joined = passwords.join("\n");
            match ctx.set_contents(joined.clone()) {
                Ok(()) => prompts::clipboard_copied(count),
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            joined.zeroize();
        } else if !self.settings.output_file_path.is_empty() {
            let path = &self.settings.output_file_path;
            let written = write_file(path, &passwords);
            passwords.zeroize();
            written.map_err(|source| Exit::Output {
                target: path.clone(),
                source,
            })?;

            let full_path = std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| path.clone());
            prompts::passwords_written(count, &full_path);
        } else {
            let stdout = io::stdout();
            let printed = print_lines(&mut stdout.lock(), &passwords);
            passwords.zeroize();
            printed.map_err(|source| Exit::Output {
                target: "stdout".to_string(),
                source,
            })?;
        }

        passwords.zeroize();
        Ok(())
    }
}

/// Stdout variant of `write_lines`: a closed pipe (`| head`) is not an error.
fn print_lines<W: Write>(out: &mut W, passwords: &[String]) -> io::Result<()> {
    match write_lines(out, passwords) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// One password per line, zeroizing each line buffer after the write.
fn write_lines<W: Write>(out: &mut W, passwords: &[String]) -> io::Result<()> {
    for pass in passwords {
        let mut line = Vec::with_capacity(pass.len() + 1);
        line.extend_from_slice(pass.as_bytes());
        line.push(b'\n');
        let written = out.write_all(&line);
        line.zeroize();
        written?;
    }
    out.flush()
}

fn write_file(path: &str, passwords: &[String]) -> io::Result<()> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_lines(&mut file, passwords)
}

/// `.` or a trailing `/` means "default file name in that directory".
fn output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_OUTPUT.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, DEFAULT_OUTPUT)
    } else {
        path.to_string()
    }
}
