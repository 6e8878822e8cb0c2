use alloc::{string::String, vec::Vec};
use core::fmt::Write;

use hashbrown::HashSet;

use crate::config::WriterFlags;
use crate::util::{INDENT, Ident, check_not_reserved};
use crate::{Alphabet, Config, Error, MAX_SIZE, MIN_SIZE, Pattern, accessor_count, patterns};

// -------------------------------------------------------------------------------------------------

/// Shorthand result used internally by the generator
type WriterResult = Result<(), Error>;

/// Swizzle accessor generator.
///
/// Writes Rust code to a [`Write`] implementation of type `W`.
#[derive(Debug)]
pub struct Writer<W> {
    out: W,
    config: Config,
}

impl<W: Write> Writer<W> {
    /// Creates a new [`Writer`] for writing code to `out`.
    pub fn new(out: W, config: Config) -> Self {
        Writer { out, config }
    }

    /// Writes an `impl` block containing every swizzle accessor of a source vector with
    /// `size` components.
    ///
    /// All accessor names are checked before anything is written, so on a naming error the
    /// output is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is unsupported, if the configured alphabets produce
    /// a reserved or duplicate name, or if the contained [`Write`] implementation returns an
    /// error.
    pub fn write(&mut self, size: u8) -> WriterResult {
        crate::check_size(size)?;
        let names = self.claim_names(size)?;

        // The vector path is written fully qualified wherever it appears.
        writeln!(self.out, "#[allow(unused_qualifications)]")?;
        writeln!(
            self.out,
            "impl<T: {bound}> {vector}<T, {size}> {{",
            bound = self.config.element_bound,
            vector = self.config.vector_path,
        )?;

        if self.config.flags.contains(WriterFlags::NAME_TABLE) {
            self.write_name_table(&names)?;
        }

        let alphabets = self.config.alphabets.clone();
        for len in MIN_SIZE..=MAX_SIZE {
            for pattern in patterns(size, len) {
                for alphabet in alphabets.iter() {
                    writeln!(self.out)?;
                    self.write_accessor(size, &pattern, alphabet)?;
                }
            }
        }

        writeln!(self.out, "}}")?;
        Ok(())
    }

    /// Writes a single accessor of a source vector with `size` components, as it appears
    /// inside the `impl` block written by [`write()`](Self::write).
    ///
    /// If `alphabet` is the first configured alphabet, the accessor gathers the components
    /// itself; otherwise it calls the accessor named in the first alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is unsupported, if `pattern` selects a component `size` does
    /// not have, if no alphabets are configured, if the name is reserved, or if the contained
    /// [`Write`] implementation returns an error.
    pub fn write_accessor(
        &mut self,
        size: u8,
        pattern: &Pattern,
        alphabet: &Alphabet,
    ) -> WriterResult {
        crate::check_size(size)?;
        pattern.check_source_size(size)?;
        let primary = *self.config.alphabets.first().ok_or(Error::NoAlphabets)?;
        let name = pattern.name(alphabet);
        check_not_reserved(&name)?;
        let primary_name = pattern.name(&primary);
        check_not_reserved(&primary_name)?;

        let flags = self.config.flags;
        let vector = &self.config.vector_path;
        let len = pattern.len();

        if flags.contains(WriterFlags::DOCS) {
            write!(self.out, "{INDENT}/// Returns components `(")?;
            for (k, &index) in pattern.indices().iter().enumerate() {
                if k > 0 {
                    write!(self.out, ", ")?;
                }
                self.out.write_char(alphabet.letter(index))?;
            }
            writeln!(self.out, ")` of `self` as a new {len}-component vector.")?;
            if *alphabet != primary {
                writeln!(
                    self.out,
                    "{INDENT}///\n{INDENT}/// Same as [`Self::{}`].",
                    Ident(&primary_name)
                )?;
            }
        }
        if flags.contains(WriterFlags::INLINE) {
            writeln!(self.out, "{INDENT}#[inline]")?;
        }
        if flags.contains(WriterFlags::MUST_USE) {
            writeln!(self.out, "{INDENT}#[must_use]")?;
        }

        let visibility = if flags.contains(WriterFlags::PUBLIC) {
            "pub "
        } else {
            ""
        };
        let constness = if flags.contains(WriterFlags::CONST) {
            "const "
        } else {
            ""
        };
        writeln!(
            self.out,
            "{INDENT}{visibility}{constness}fn {name}(&self) -> {vector}<T, {len}> {{",
            name = Ident(&name),
        )?;

        if *alphabet == primary {
            write!(self.out, "{INDENT}{INDENT}{vector}([")?;
            for (k, &index) in pattern.indices().iter().enumerate() {
                if k > 0 {
                    write!(self.out, ", ")?;
                }
                write!(self.out, "self.0[{index}]")?;
            }
            writeln!(self.out, "])")?;
        } else {
            writeln!(self.out, "{INDENT}{INDENT}self.{}()", Ident(&primary_name))?;
        }

        writeln!(self.out, "{INDENT}}}")?;
        Ok(())
    }

    /// Consumes the writer and returns the output.
    pub fn finish(self) -> W {
        self.out
    }

    /// Computes every accessor name for `size` in declaration order, failing on any name that
    /// is reserved or claimed twice.
    fn claim_names(&self, size: u8) -> Result<Vec<String>, Error> {
        let alphabets = &self.config.alphabets;
        if alphabets.is_empty() {
            return Err(Error::NoAlphabets);
        }

        let mut claimed = HashSet::new();
        let mut ordered = Vec::with_capacity(accessor_count(size, alphabets.len()));
        for len in MIN_SIZE..=MAX_SIZE {
            for pattern in patterns(size, len) {
                for alphabet in alphabets.iter() {
                    let name = pattern.name(alphabet);
                    check_not_reserved(&name)?;
                    if !claimed.insert(name.clone()) {
                        return Err(Error::DuplicateName(name));
                    }
                    ordered.push(name);
                }
            }
        }
        Ok(ordered)
    }

    fn write_name_table(&mut self, names: &[String]) -> WriterResult {
        let visibility = if self.config.flags.contains(WriterFlags::PUBLIC) {
            "pub "
        } else {
            ""
        };
        if self.config.flags.contains(WriterFlags::DOCS) {
            writeln!(
                self.out,
                "{INDENT}/// Names of every swizzle accessor of this vector type, in declaration order."
            )?;
        }
        writeln!(self.out, "{INDENT}{visibility}const SWIZZLE_NAMES: &[&str] = &[")?;
        for name in names {
            writeln!(self.out, "{INDENT}{INDENT}\"{name}\",")?;
        }
        writeln!(self.out, "{INDENT}];")?;
        Ok(())
    }
}
