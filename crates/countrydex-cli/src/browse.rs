//! Interactive terminal browsing.
//!
//! Search input goes through a [`Debouncer`], so a burst of `/term` lines
//! (e.g. pasted input) only applies the last one.

use crate::render;
use countrydex_core::debounce::Debouncer;
use countrydex_core::traits::WeatherSource;
use countrydex_core::{Browser, CountryDetail, CountryDexError};
use parking_lot::Mutex;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Page(usize),
    Search(String),
    Open(String),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if let Some(term) = line.strip_prefix('/') {
        return Some(Command::Search(term.to_string()));
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match head.to_ascii_lowercase().as_str() {
        "n" | "next" => Some(Command::Next),
        "p" | "prev" | "previous" => Some(Command::Previous),
        "o" | "open" if !rest.is_empty() => Some(Command::Open(rest.to_string())),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => head.parse().ok().map(Command::Page),
    }
}

const HELP: &str = "n/p: next/previous page, <number>: go to page, /text: search, open CODE: details, q: quit";

/// Detail for `code`, after any search still waiting in `search` has been
/// applied. The session lock is released before the weather lookup.
fn open(
    browser: &Mutex<Browser>,
    search: &Debouncer<String>,
    code: &str,
    weather: Option<&dyn WeatherSource>,
) -> Option<CountryDetail> {
    search.flush();
    let record = browser.lock().catalog().find(code).cloned()?;
    Some(match weather {
        Some(source) => CountryDetail::with_weather(&record, source),
        None => CountryDetail::from(&record),
    })
}

pub fn run(browser: Browser, weather: Option<&dyn WeatherSource>, debounce: Duration) -> anyhow::Result<()> {
    let browser = Arc::new(Mutex::new(browser));

    let search = {
        let browser = Arc::clone(&browser);
        Debouncer::new(debounce, move |term: String| {
            let mut b = browser.lock();
            let matches = b.search(&term);
            debug!(%term, matches, "search applied");
            let mut out = io::stdout().lock();
            render::page(&mut out, &b.page()).ok();
            write!(out, "> ").ok();
            out.flush().ok();
        })
    };

    {
        let mut out = io::stdout().lock();
        render::page(&mut out, &browser.lock().page())?;
        writeln!(out, "{HELP}")?;
    }

    let stdin = io::stdin();
    loop {
        {
            let mut out = io::stdout().lock();
            write!(out, "> ")?;
            out.flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let Some(command) = parse_command(&line) else {
            println!("{HELP}");
            continue;
        };

        let moved = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Search(term) => {
                search.call(term);
                continue;
            }
            Command::Open(code) => {
                match open(&browser, &search, &code, weather) {
                    Some(d) => render::detail(&mut io::stdout().lock(), &d)?,
                    None => println!("No country found for: {code}"),
                }
                continue;
            }
            Command::Next => browser.lock().next(),
            Command::Previous => browser.lock().previous(),
            Command::Page(n) => browser.lock().go_to(n),
        };

        match moved {
            Ok(()) => render::page(&mut io::stdout().lock(), &browser.lock().page())?,
            // Out-of-range page requests are ignored.
            Err(CountryDexError::OutOfRange { .. }) => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use countrydex_core::{Coordinates, CountryRecord, WeatherReport, WeatherStatus};
    use std::cell::Cell;

    struct LockWatcher {
        browser: Arc<Mutex<Browser>>,
        locked: Cell<Option<bool>>,
    }

    impl WeatherSource for LockWatcher {
        fn current_weather(&self, _at: Coordinates) -> countrydex_core::Result<WeatherReport> {
            self.locked.set(Some(self.browser.is_locked()));
            Err(CountryDexError::WeatherUnavailable("offline".into()))
        }
    }

    #[test]
    fn open_applies_pending_search_and_fetches_weather_unlocked() {
        let mut norway = CountryRecord::new("NOR", "Norway");
        norway.latitude = Some(62.0);
        norway.longitude = Some(10.0);
        let mut b = Browser::new(16).unwrap();
        b.load(vec![norway, CountryRecord::new("PER", "Peru")]);
        let browser = Arc::new(Mutex::new(b));

        let search = {
            let browser = Arc::clone(&browser);
            Debouncer::new(Duration::from_secs(10), move |term: String| {
                browser.lock().search(&term);
            })
        };
        search.call("per".to_string());

        let weather = LockWatcher {
            browser: Arc::clone(&browser),
            locked: Cell::new(None),
        };
        let detail = open(&browser, &search, "nor", Some(&weather)).unwrap();
        assert_eq!(browser.lock().catalog().filter_term(), "per");
        assert_eq!(weather.locked.get(), Some(false));
        assert_eq!(detail.card.name, "Norway");
        assert_eq!(detail.weather, Some(WeatherStatus::unavailable("offline")));

        assert!(open(&browser, &search, "zzz", None).is_none());
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(parse_command("n"), Some(Command::Next));
        assert_eq!(parse_command(" PREV "), Some(Command::Previous));
        assert_eq!(parse_command("12"), Some(Command::Page(12)));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn parses_search_and_open() {
        assert_eq!(
            parse_command("/united k"),
            Some(Command::Search("united k".into()))
        );
        assert_eq!(parse_command("/"), Some(Command::Search(String::new())));
        assert_eq!(parse_command("open deu"), Some(Command::Open("deu".into())));
        assert_eq!(parse_command("open"), None);
        assert_eq!(parse_command("banana"), None);
    }
}
