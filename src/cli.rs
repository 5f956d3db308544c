//! Line-oriented SHA-3 hashing: every line of the input file is hashed as one message.
//!
//! Without `--size`, each line produces four lines of output, one per fixed-size variant,
//! followed by a blank line:
//!
//! ```text
//! SHA-224: 6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7
//! SHA-256: a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a
//! ...
//! ```
//!
//! With `--size`, each line produces its bare hex digest,
//! and the time spent hashing it (in microseconds) is appended to the timings file.
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use crate::digest::hash;
use crate::errors::{Error, Result};
use crate::hash::{provider::Provider, Permutation};
use crate::variant::Variant;

/// SHA-3 hash generator.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "sha3sum-lines")]
#[command(about = "Sha3 hash generator: hashes every line of a file", long_about = None)]
#[command(version)]
pub struct Args {
    /// Input file, one message per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Hash size from {224, 256, 384, 512}. If not specified, hashes for all sizes are calculated
    #[arg(short, long, value_name = "BITS")]
    pub size: Option<usize>,

    /// Output file. If not specified, output goes to stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keccak-f[1600] provider: reference or keccak
    #[arg(short = 'd', long, value_name = "NAME", default_value = "reference")]
    pub provider: String,

    /// Where per-line timings are written when a single size is requested
    #[arg(short, long, value_name = "FILE", default_value = "timings.txt")]
    pub timings: PathBuf,
}

/// A validated [`Args`]: every name resolved, nothing opened yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub provider: Provider,
    /// `None` computes all fixed-size variants.
    pub variant: Option<Variant>,
}

impl Args {
    /// Resolves the provider and the digest size.
    pub fn job(&self) -> Result<Job> {
        let provider = self.provider.parse::<Provider>()?;
        let variant = self.size.map(Variant::from_bits).transpose()?;
        Ok(Job { provider, variant })
    }
}

/// Runs the command line described by `args`, returning the number of lines hashed.
///
/// All configuration, and opening every file, happens before the first line is hashed,
/// so a misconfigured run produces no partial output.
pub fn run(args: &Args) -> Result<usize> {
    let job = args.job()?;
    let input_path = args.input.as_ref().ok_or(Error::MissingInput)?;
    log::debug!("hashing lines of {} with {job:?}", input_path.display());

    let input = File::open(input_path)
        .map(BufReader::new)
        .map_err(Error::io(format!("cannot open {}", input_path.display())))?;

    let mut timings = match job.variant {
        Some(_) => Some(
            File::create(&args.timings)
                .map(BufWriter::new)
                .map_err(Error::io(format!("cannot open {}", args.timings.display())))?,
        ),
        None => None,
    };

    // the output is truncated only after every other file has opened
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .map(BufWriter::new)
                .map_err(Error::io(format!("cannot open {}", path.display())))?,
        ),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let lines = hash_lines(
        input,
        &mut output,
        timings.as_mut().map(|t| t as &mut dyn Write),
        job.variant,
        job.provider.permutation(),
    )?;

    output.flush().map_err(output_error)?;
    if let Some(t) = timings.as_mut() {
        t.flush().map_err(timings_error)?;
    }
    Ok(lines)
}

/// Hashes every line of `input` and writes the digests to `output`.
///
/// Lines end at `\n`, a trailing `\r` is dropped, and the remaining bytes are the message:
/// empty lines and non-UTF-8 bytes are valid messages.
/// A clean end of input stops the loop; a read error aborts it.
pub fn hash_lines<R, W>(
    mut input: R,
    output: &mut W,
    mut timings: Option<&mut dyn Write>,
    variant: Option<Variant>,
    permutation: &dyn Permutation,
) -> Result<usize>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut line = Vec::new();
    let mut count = 0;

    loop {
        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .map_err(|source| Error::Io {
                context: format!("error reading line {}", count + 1),
                source,
            })?;
        if read == 0 {
            break;
        }
        let message = strip_line_ending(&line);

        match variant {
            None => {
                for v in Variant::FIXED {
                    let digest = hash(message, v, Some(permutation));
                    writeln!(output, "SHA-{}: {digest}", digest.bits()).map_err(output_error)?;
                }
                writeln!(output).map_err(output_error)?;
            }
            Some(v) => {
                let start = Instant::now();
                let digest = hash(message, v, Some(permutation));
                let elapsed = start.elapsed();
                if let Some(t) = timings.as_deref_mut() {
                    writeln!(t, "{}", elapsed.as_micros()).map_err(timings_error)?;
                }
                writeln!(output, "{digest}").map_err(output_error)?;
            }
        }
        count += 1;
    }

    Ok(count)
}

fn output_error(source: io::Error) -> Error {
    Error::io("writing output")(source)
}

fn timings_error(source: io::Error) -> Error {
    Error::io("writing timings")(source)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
