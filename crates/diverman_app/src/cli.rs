use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Extract words, hyphenated words and filenames from a file, a URL, or a list of URLs.
#[derive(Debug, Parser)]
#[command(name = "diverman", version)]
#[command(group(ArgGroup::new("source").required(true).multiple(false)))]
pub struct Cli {
    /// Path to a local text file.
    #[arg(short = 'f', long = "file", group = "source")]
    pub file: Option<PathBuf>,

    /// URL to retrieve text from.
    #[arg(short = 'u', long = "url", group = "source")]
    pub url: Option<String>,

    /// Path to a file containing one URL per line.
    #[arg(short = 'l', long = "url_list", group = "source")]
    pub url_list: Option<PathBuf>,

    /// Number of concurrent requests when processing a URL list.
    #[arg(short = 't', long = "threads", default_value_t = 5,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,

    /// Custom HTTP headers in the format 'key1:value1,key2:value2'.
    #[arg(short = 'H', long = "headers")]
    pub headers: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout", default_value_t = 30,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Increase diagnostic output on stderr (repeat for more).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The input selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
    UrlList(PathBuf),
}

impl Cli {
    pub fn source(&self) -> Option<Source> {
        if let Some(path) = &self.file {
            return Some(Source::File(path.clone()));
        }
        if let Some(url) = &self.url {
            return Some(Source::Url(url.clone()));
        }
        self.url_list.clone().map(Source::UrlList)
    }
}
