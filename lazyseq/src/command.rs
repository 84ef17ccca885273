use std::io::{self, Write};

use clap::{Args, ValueEnum};
use lazyseq_core::dynamic;
use lazyseq_core::value::{op_add, op_max, op_min, op_multiply};
use lazyseq_core::{Error, Result, Value};

use crate::literal;

/// Writes values as they are pulled, with the separator between them.
pub(crate) struct Printer<W> {
    out: W,
    separator: String,
    written: bool,
}

impl<W: Write> Printer<W> {
    pub(crate) fn new(out: W, separator: &str) -> Self {
        Printer {
            out,
            separator: separator.to_string(),
            written: false,
        }
    }

    fn value(&mut self, value: &Value) -> io::Result<()> {
        if self.written {
            self.out.write_all(self.separator.as_bytes())?;
        }
        write!(self.out, "{value}")?;
        self.written = true;
        Ok(())
    }

    /// Print every value up to the first error, which is handed back.
    fn results(&mut self, iter: impl Iterator<Item = Result<Value>>) -> io::Result<Option<Error>> {
        for item in iter {
            match item {
                Ok(value) => self.value(&value)?,
                Err(error) => return Ok(Some(error)),
            }
        }
        Ok(None)
    }

    // a sequence that could not even be constructed prints nothing
    fn emit<I>(&mut self, sequence: Result<I>) -> io::Result<Option<Error>>
    where
        I: Iterator<Item = Result<Value>>,
    {
        match sequence {
            Ok(iter) => self.results(iter),
            Err(error) => Ok(Some(error)),
        }
    }

    /// End the output line, if anything was printed, and flush.
    pub(crate) fn finish(mut self) -> io::Result<W> {
        if self.written {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

fn parse_all(args: &[String]) -> Vec<Value> {
    args.iter().map(|arg| literal::parse(arg)).collect()
}

// `undefined` when the literal was left out
fn parse_optional(arg: Option<&str>) -> Value {
    arg.map_or(Value::Absent, literal::parse)
}

fn range_source(stop: &str) -> Result<dynamic::NumberRange> {
    dynamic::range(&[literal::parse(stop)])
}

#[derive(Debug, Args)]
pub(crate) struct Range {
    /// START, STOP and STEP literals
    #[arg(allow_hyphen_values = true)]
    pub(crate) args: Vec<String>,
}

impl Range {
    pub(crate) fn run<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<Option<Error>> {
        printer.emit(dynamic::range(&parse_all(&self.args)).map(|range| range.map(Ok)))
    }
}

#[derive(Debug, Args)]
pub(crate) struct Count {
    /// START and STEP literals
    #[arg(allow_hyphen_values = true)]
    pub(crate) args: Vec<String>,
    /// How many values to print
    #[arg(long)]
    pub(crate) limit: usize,
}

impl Count {
    pub(crate) fn run<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<Option<Error>> {
        let count = dynamic::count(&parse_all(&self.args));
        printer.emit(count.map(|count| count.take(self.limit).map(Ok)))
    }
}

#[derive(Debug, Args)]
pub(crate) struct Islice {
    /// Slice `range(N)`
    #[arg(long, allow_hyphen_values = true, value_name = "N")]
    pub(crate) range: Option<String>,
    /// Slice this literal
    #[arg(
        long,
        allow_hyphen_values = true,
        value_name = "LITERAL",
        conflicts_with = "range"
    )]
    pub(crate) source: Option<String>,
    /// START, STOP and STEP literals
    #[arg(allow_hyphen_values = true)]
    pub(crate) args: Vec<String>,
}

impl Islice {
    pub(crate) fn run<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<Option<Error>> {
        let args = parse_all(&self.args);
        match &self.range {
            Some(stop) => {
                let slice = range_source(stop).and_then(|source| dynamic::islice(source, &args));
                printer.emit(slice.map(|slice| slice.map(Ok)))
            }
            None => {
                let slice = parse_optional(self.source.as_deref())
                    .try_iter()
                    .and_then(|source| dynamic::islice(source, &args));
                printer.emit(slice.map(|slice| slice.map(Ok)))
            }
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct Chain {
    /// Source literals
    #[arg(allow_hyphen_values = true)]
    pub(crate) sources: Vec<String>,
    /// Only print the first N values
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

impl Chain {
    pub(crate) fn run<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<Option<Error>> {
        let chain = dynamic::chain(parse_all(&self.sources));
        match self.limit {
            Some(limit) => printer.results(chain.take(limit)),
            None => printer.results(chain),
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct ChainFromIterable {
    /// A literal whose members are the sources
    #[arg(allow_hyphen_values = true)]
    pub(crate) sources: Option<String>,
}

impl ChainFromIterable {
    pub(crate) fn run<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<Option<Error>> {
        printer.emit(dynamic::chain_from_iterable(&parse_optional(
            self.sources.as_deref(),
        )))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Combiner {
    #[default]
    Add,
    Multiply,
    Min,
    Max,
}

impl Combiner {
    fn function(self) -> fn(Value, Value) -> Result<Value> {
        match self {
            Combiner::Add => op_add,
            Combiner::Multiply => op_multiply,
            Combiner::Min => op_min,
            Combiner::Max => op_max,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct Accumulate {
    /// Accumulate over `range(N)` instead of a literal source
    #[arg(long, allow_hyphen_values = true, value_name = "N")]
    pub(crate) range: Option<String>,
    /// How to combine the running total with the next element
    #[arg(long, value_enum, default_value_t)]
    pub(crate) combiner: Combiner,
    /// The source literal
    #[arg(allow_hyphen_values = true, conflicts_with = "range")]
    pub(crate) source: Option<String>,
}

impl Accumulate {
    pub(crate) fn run<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<Option<Error>> {
        let combine = self.combiner.function();
        match &self.range {
            Some(stop) => printer.emit(
                range_source(stop).map(|source| dynamic::accumulate_values(source, combine)),
            ),
            None => printer.emit(dynamic::accumulate_with(
                &parse_optional(self.source.as_deref()),
                combine,
            )),
        }
    }
}
