// src/cli.rs
use std::{env, path::Path, path::PathBuf};

use crate::params::{Params, Source};
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = CliProgress::default();
    let summary = runner::run(&params, Some(&mut progress))?;

    println!(
        "{} file(s) written, {} page(s) failed",
        summary.files_written.len(),
        summary.pages_failed
    );
    if summary.pages_failed > 0 {
        return Err("some pages could not be processed".into());
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                let (name, url) = v
                    .split_once('=')
                    .filter(|(n, u)| !n.is_empty() && !u.is_empty())
                    .ok_or("Expected --url NAME=URL")?;
                params.sources.push(Source::Url { name: s!(name), url: s!(url) });
            }
            "-f" | "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                params.sources.push(Source::File(PathBuf::from(v)));
            }
            "-o" | "--out" => {
                params.out = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--csv-only" => params.csv_only = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.sources.is_empty() {
        return Err("Specify at least one --url NAME=URL or --file PATH".into());
    }
    Ok(())
}

/* ---------------- CLI progress sink ---------------- */

#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, name: &str, path: &Path) {
        self.done += 1;
        println!("[{}/{}] {} -> {}", self.done, self.total, name, path.display());
    }
    fn item_failed(&mut self, name: &str) {
        self.done += 1;
        println!("[{}/{}] {} failed", self.done, self.total, name);
    }
}
