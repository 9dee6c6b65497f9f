//! Password delivery: stdout and clipboard.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};

use super::Password;

/// Result of a clipboard copy. A failed copy still means the password was
/// generated and printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Copied,
    CopyFailed(String),
}

/// Write the password followed by a newline.
pub fn print<W: Write>(out: &mut W, password: &Password) -> io::Result<()> {
    out.write_all(password.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Copy to the given clipboard. The provider takes ownership of its own
/// copy of the text; only `password` itself is wiped on drop.
pub fn copy<C: ClipboardProvider>(clipboard: &mut C, password: &Password) -> Delivery {
    match clipboard.set_contents(password.as_str().to_owned()) {
        Ok(()) => Delivery::Copied,
        Err(e) => {
            tracing::debug!(error = %e, "clipboard set_contents failed");
            Delivery::CopyFailed(e.to_string())
        }
    }
}

/// Copy to the system clipboard. Failing to open it counts as a failed copy.
pub fn copy_to_system(password: &Password) -> Delivery {
    match ClipboardContext::new() {
        Ok(mut ctx) => copy(&mut ctx, password),
        Err(e) => {
            tracing::debug!(error = %e, "system clipboard unavailable");
            Delivery::CopyFailed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::pass::{CharacterTypeSet, Generator};

    type ClipResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Option<String>,
        broken: bool,
        reads: usize,
    }

    impl ClipboardProvider for FakeClipboard {
        fn get_contents(&mut self) -> ClipResult<String> {
            self.reads += 1;
            self.contents.clone().ok_or_else(|| "empty".into())
        }

        fn set_contents(&mut self, contents: String) -> ClipResult<()> {
            if self.broken {
                return Err("no display".into());
            }
            self.contents = Some(contents);
            Ok(())
        }
    }

    fn password() -> Password {
        Generator::new().generate(12, &CharacterTypeSet::all()).unwrap()
    }

    #[test]
    fn copy_places_password_on_clipboard() {
        let pass = password();
        let mut clipboard = FakeClipboard::default();
        assert_eq!(copy(&mut clipboard, &pass), Delivery::Copied);
        assert_eq!(clipboard.contents.as_deref(), Some(pass.as_str()));
    }

    #[test]
    fn copy_never_reads_the_clipboard_back() {
        let pass = password();
        let mut clipboard = FakeClipboard::default();
        copy(&mut clipboard, &pass);
        assert_eq!(clipboard.reads, 0);
    }

    #[test]
    fn failed_copy_still_prints() {
        let pass = password();
        let mut clipboard = FakeClipboard {
            broken: true,
            ..Default::default()
        };

        let mut out = Vec::new();
        print(&mut out, &pass).unwrap();
        let delivery = copy(&mut clipboard, &pass);

        assert_eq!(delivery, Delivery::CopyFailed("no display".to_string()));
        assert_eq!(out, format!("{}\n", pass.as_str()).into_bytes());
    }
}
