use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;

// ---------------------------------------------------------------------------
// Functional Core — pure types and logic, no I/O
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckId {
    Fmt,
    Clippy,
    Test,
}

/// A cargo invocation run as one lint step.
struct Check {
    id: CheckId,
    args: &'static [&'static str],
    /// Arguments used instead of `args` under `--fix`.
    fix_args: Option<&'static [&'static str]>,
}

/// Checks in the order they run. The first failure stops the pipeline.
const CHECKS: &[Check] = &[
    Check {
        id: CheckId::Fmt,
        args: &["fmt", "--all", "--check"],
        fix_args: Some(&["fmt", "--all"]),
    },
    Check {
        id: CheckId::Clippy,
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        fix_args: Some(&[
            "clippy",
            "--workspace",
            "--all-targets",
            "--fix",
            "--allow-dirty",
            "--",
            "-D",
            "warnings",
        ]),
    },
    Check {
        id: CheckId::Test,
        args: &["test", "--workspace"],
        fix_args: None,
    },
];

fn should_skip(id: CheckId, args: &LintArgs) -> bool {
    match id {
        CheckId::Fmt => args.no_fmt,
        CheckId::Clippy => args.no_clippy,
        CheckId::Test => args.no_test,
    }
}

fn effective_args(check: &Check, fix: bool) -> &'static [&'static str] {
    match (fix, check.fix_args) {
        (true, Some(fix_args)) => fix_args,
        _ => check.args,
    }
}

fn display_name(args: &[&str]) -> String {
    format!("cargo {}", args.join(" "))
}

// ---------------------------------------------------------------------------
// Imperative Shell — I/O, side effects, orchestration
// ---------------------------------------------------------------------------

pub fn run(args: &LintArgs) -> Result<()> {
    for check in CHECKS.iter().filter(|check| !should_skip(check.id, args)) {
        let cargo_args = effective_args(check, args.fix);
        let name = display_name(cargo_args);
        println!("==> {name}");

        let output = cmd("cargo", cargo_args)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()?;
        let text = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            print!("{text}");
            return Err(eyre!("lint failed at: {name}"));
        }

        if args.verbose {
            print!("{text}");
        }
    }

    println!("All checks passed");
    Ok(())
}
