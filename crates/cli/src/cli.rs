//! CLI argument parsing with clap derive.
//!
//! The binary takes no arguments: it reads the concatenated input on stdin
//! and writes the processed document to stdout.

use clap::Parser;

const AFTER_HELP: &str = "\
Escapes:
  !(CODE)          evaluate and print, or run as statements
  !p(CODE)         evaluate and print (!print)
  !e(CODE)         run as statements (!exec)
  !c(TEXT)         comment, also !c.. to end of line (!comment)
  !dnl(TEXT)       discard, with the following newline (!deletenewline)
  !i(CODE)         like !( ) but eats surrounding whitespace (!inline)
  !b(CODE)         like !i( ) but keeps a normalized gap (!block)

Use (((CODE))) instead of (CODE) when the code has unbalanced parentheses.

Environment:
  PREP_DEBUG=1     annotate matches instead of running them
  PREP_LOG=FILTER  stderr log filter (default: warn)";

/// Expand embedded script fragments in a template
#[derive(Parser, Debug)]
#[command(name = "prep")]
#[command(about, long_about = None)]
#[command(override_usage = "prep --help\n       cat in_file [in_file ...] | prep > out_file")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {}
