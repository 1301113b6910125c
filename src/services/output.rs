//! Output wiring shared by all command handlers.
//!
//! With `--json` every command prints a single `{ "ok": true, "data": ... }`
//! document; otherwise the supplied closure turns each record into one
//! plain-text line. Commands that produce a whole document (CSV, HTML) go
//! through `emit_document`, which writes to a file or stdout.

use crate::domain::models::JsonOut;
use serde::Serialize;
use std::path::Path;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", line(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", line(&data));
    }
    Ok(())
}

/// Write a finished document (CSV, HTML) to `output`, or print it as-is to
/// stdout. With `--json` and no target file the document itself becomes the
/// envelope's data.
pub fn emit_document(json: bool, output: Option<&Path>, content: String) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            print_one(json, path.display().to_string(), |p| format!("wrote {p}"))
        }
        None if json => print_one(true, content, |_| String::new()),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_document_writes_the_target_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.csv");
        emit_document(false, Some(&target), "a,b\n1,2\n".to_string()).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "a,b\n1,2\n");
    }
}
