use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use swiftwright_codegen::SwiftcChecker;
use swiftwright_docs::{Harness, Report, SampleFailure};

use crate::config::Config;

#[derive(Args)]
pub struct CheckDocsCommand {
    /// Markdown files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Swift compiler to check samples with (overrides configuration)
    #[arg(long)]
    pub swiftc: Option<PathBuf>,
}

impl CheckDocsCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let checker = match self.swiftc.as_ref().or(config.docs.swiftc.as_ref()) {
            Some(program) => SwiftcChecker::with_program(program),
            None => SwiftcChecker::new(),
        };
        let harness = Harness::with_config(checker, config.docs.harness.clone());

        let report = match harness.check_paths(&self.paths) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        };

        print_report(&report);
        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}

fn print_report(report: &Report) {
    for sample in &report.samples {
        println!("{}", sample);
    }

    for failed in report.failures() {
        let document = std::fs::read_to_string(&failed.path).unwrap_or_default();
        if let Some(failure) = SampleFailure::new(failed, document) {
            eprintln!("{:?}", miette::Report::new(failure));
        }
    }

    println!();
    let status = if report.is_success() { "ok" } else { "FAILED" };
    println!("doc samples: {}. {}", status, report.summary());
}
