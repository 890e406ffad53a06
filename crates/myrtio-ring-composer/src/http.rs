//! Control surface routes
//!
//! Maps a request target (`/path?query`) to the commands it carries:
//!
//! | Route | Commands |
//! |---|---|
//! | `/?color=<name>&brightness=<1..5>` | `SetColor`, `SetBrightness` |
//! | `/start` | `StartPulse` |
//! | `/stop` | `StopPulse` |
//! | `/runstart` | `StartChase` |
//! | `/runstop` | `StopChase` |
//!
//! Unknown query keys and malformed values are dropped silently.

use heapless::Vec;

use crate::{brightness::BrightnessLevel, color::NamedColor, command::Command};

const QUERY_KEY_COLOR: &str = "color";
const QUERY_KEY_BRIGHTNESS: &str = "brightness";

/// Commands carried by a single request
pub type RouteCommands = Vec<Command, 2>;

/// Parse a request target into commands.
///
/// Returns `None` when the path is not a control route.
pub fn parse_route(target: &str) -> Option<RouteCommands> {
    let (path, query) = split_target(target);
    let mut commands = RouteCommands::new();

    let command = match path {
        "/" | "" => {
            parse_index_query(query, &mut commands);
            return Some(commands);
        }
        "/start" => Command::StartPulse,
        "/stop" => Command::StopPulse,
        "/runstart" => Command::StartChase,
        "/runstop" => Command::StopChase,
        _ => return None,
    };
    // Capacity is 2, a single push cannot fail
    let _ = commands.push(command);
    Some(commands)
}

/// Split the target into path and query, dropping any fragment
fn split_target(target: &str) -> (&str, &str) {
    let target = target.split('#').next().unwrap_or(target);
    match target.split_once('?') {
        Some((path, query)) => (path, query),
        None => (target, ""),
    }
}

/// Color is always applied before brightness, whatever the query order
fn parse_index_query(query: &str, commands: &mut RouteCommands) {
    let color = query_value(query, QUERY_KEY_COLOR).and_then(NamedColor::parse_from_str);
    let brightness =
        query_value(query, QUERY_KEY_BRIGHTNESS).and_then(BrightnessLevel::parse_from_str);

    if let Some(color) = color {
        let _ = commands.push(Command::SetColor(color));
    }
    if let Some(brightness) = brightness {
        let _ = commands.push(Command::SetBrightness(brightness));
    }
}

/// Find the first value for `key` in an `a=b&c=d` query string
fn query_value<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}
