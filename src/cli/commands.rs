//! Command implementation for the lexifreq CLI.

use crate::analysis::Language;
use crate::cli::args::LexifreqArgs;
use crate::corpus::{word_frequencies, write_frequency_table};
use crate::error::Result;
use crate::parallel::config::AggregatorConfig;
use crate::parallel::progress::{ConsoleProgress, NullProgress, ProgressReport};

/// Run the frequency extraction described by `args`.
///
/// On any failure the error propagates to the caller and no output file is
/// written.
pub fn execute(args: LexifreqArgs) -> Result<()> {
    let language = Language::from_tag(&args.language);
    let config = AggregatorConfig::new()
        .with_worker_count(args.workers)
        .with_limit(args.limit);

    if args.verbosity() > 0 {
        println!(
            "Counting {} with the {} tokenizer",
            args.corpus_dir.display(),
            language.tokenizer().name()
        );
    }

    let progress: &dyn ProgressReport = if args.verbosity() > 0 {
        &ConsoleProgress
    } else {
        &NullProgress
    };

    let table = word_frequencies(
        &args.corpus_dir,
        language,
        &config,
        args.min_count,
        progress,
    )?;

    write_frequency_table(&args.output_file, &table)?;

    if args.verbosity() > 0 {
        println!(
            "Wrote {} token(s) to {}",
            table.len(),
            args.output_file.display()
        );
    }

    Ok(())
}
