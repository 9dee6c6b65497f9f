//! CLI context - bundles settings and flags for one non-interactive run.

use std::io::{self, Write};

use super::{CliFlags, ParseError, prompts, quiet};
use crate::pass::output::{self, Delivery};
use crate::pass::{GenerateError, Generator};
use crate::rand::RandomSource;
use crate::settings::Settings;
use crate::tui::print_help;

/// Why a run stopped before printing a password.
#[derive(Debug)]
pub enum Halt {
    /// Early exit - not an error, just done.
    Done,
    /// Nothing was generated.
    Generation(GenerateError),
    /// Generated but could not be written to stdout.
    Output(io::Error),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self::with_settings(flags, settings))
    }

    /// Build from already-parsed flags over a base configuration.
    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        let mut ctx = Self { settings, flags };
        ctx.apply_flags();
        ctx
    }

    /// Run CLI. `Err(Halt::Done)` for info flags, `Ok(())` once the password
    /// has been written to `out` (whether or not the clipboard copy worked).
    pub fn run<R: RandomSource, W: Write>(
        &mut self,
        generator: &mut Generator<R>,
        out: &mut W,
    ) -> Result<(), Halt> {
        self.handle_info_flags()?;

        let password = generator
            .generate(self.settings.length, &self.settings.types)
            .map_err(Halt::Generation)?;

        output::print(out, &password).map_err(Halt::Output)?;

        if self.settings.to_clipboard {
            match output::copy_to_system(&password) {
                Delivery::Copied => prompts::clipboard_copied(),
                Delivery::CopyFailed(e) => prompts::clipboard_error(&e),
            }
        }

        self.handle_save();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Halt> {
        if self.flags.help {
            print_help();
            return Err(Halt::Done);
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Halt::Done);
        }
        Ok(())
    }

    /// Apply CLI flags on top of the base settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }

        let types = &mut self.settings.types;
        if self.flags.no_numbers {
            types.numbers = false;
        }
        if self.flags.no_upper {
            types.uppercase = false;
        }
        if self.flags.no_lower {
            types.lowercase = false;
        }
        if self.flags.no_special {
            types.special = false;
        }

        if self.flags.clipboard {
            self.settings.to_clipboard = true;
        }
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(&Settings::path().display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharacterTypeSet, MAX_LENGTH};
    use crate::rand::SecureRand;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded() -> Generator<SecureRand<StdRng>> {
        Generator::with_source(SecureRand::from_rng(StdRng::seed_from_u64(7)))
    }

    /// Run a context with a seeded generator, returning what it wrote.
    fn run(ctx: &mut Context) -> (Result<(), Halt>, String) {
        let mut out = Vec::new();
        let result = ctx.run(&mut seeded(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn flags_override_base_settings() {
        let flags = CliFlags {
            length: Some(30),
            no_numbers: true,
            no_special: true,
            clipboard: true,
            ..Default::default()
        };
        let ctx = Context::with_settings(flags, Settings::default());
        assert_eq!(ctx.settings.length, 30);
        assert_eq!(
            ctx.settings.types,
            CharacterTypeSet {
                numbers: false,
                uppercase: true,
                lowercase: true,
                special: false,
            }
        );
        assert!(ctx.settings.to_clipboard);
    }

    #[test]
    fn saved_settings_survive_without_flags() {
        let saved = Settings {
            length: 9,
            types: CharacterTypeSet {
                numbers: true,
                uppercase: false,
                lowercase: false,
                special: false,
            },
            to_clipboard: true,
        };
        let ctx = Context::with_settings(CliFlags::default(), saved.clone());
        assert_eq!(ctx.settings, saved);
    }

    #[test]
    fn disabling_every_class_fails_generation() {
        let flags = CliFlags {
            no_numbers: true,
            no_upper: true,
            no_lower: true,
            no_special: true,
            ..Default::default()
        };
        let mut ctx = Context::with_settings(flags, Settings::default());
        let (result, out) = run(&mut ctx);
        assert!(matches!(
            result,
            Err(Halt::Generation(GenerateError::EmptyCharacterSet))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn too_short_fails_generation() {
        let flags = CliFlags {
            length: Some(2),
            ..Default::default()
        };
        let mut ctx = Context::with_settings(flags, Settings::default());
        let (result, out) = run(&mut ctx);
        assert!(matches!(
            result,
            Err(Halt::Generation(GenerateError::InvalidLength {
                length: 2,
                min: 4,
                max: MAX_LENGTH
            }))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn output_is_only_the_password_line() {
        let flags = CliFlags {
            length: Some(20),
            no_special: true,
            ..Default::default()
        };
        let mut ctx = Context::with_settings(flags, Settings::default());
        let (result, out) = run(&mut ctx);
        assert!(result.is_ok());

        let line = out.strip_suffix('\n').unwrap();
        assert_eq!(line.len(), 20);
        assert!(!line.contains('\n'));
        assert!(line.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn info_flags_write_no_password() {
        let flags = CliFlags {
            version: true,
            ..Default::default()
        };
        let mut ctx = Context::with_settings(flags, Settings::default());
        let (result, out) = run(&mut ctx);
        assert!(matches!(result, Err(Halt::Done)));
        assert!(out.is_empty());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut ctx = Context::with_settings(CliFlags::default(), Settings::default());
        let result = ctx.run(&mut seeded(), &mut BrokenPipe);
        assert!(matches!(result, Err(Halt::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
