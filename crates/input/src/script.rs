use thiserror::Error;

use crate::action::InputEvent;
use crate::bindings::KeyBindings;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: expected `<tick> press|release <key>`")]
    Malformed { line: usize },

    #[error("line {line}: invalid tick `{value}`")]
    InvalidTick { line: usize, value: String },

    #[error("line {line}: unknown verb `{verb}` (expected press or release)")]
    UnknownVerb { line: usize, verb: String },

    #[error("line {line}: key `{key}` is not bound to any action")]
    UnboundKey { line: usize, key: String },
}

/// Timed key events for headless runs.
///
/// One event per line: `<tick> press|release <key>`. Blank lines and lines
/// starting with `#` are skipped. Events keep file order within a tick.
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    events: Vec<(u64, InputEvent)>,
}

/// Walk right, sprint, hop onto the stacked tiles, then stop.
pub const DEMO_SCRIPT: &str = "\
# tick verb key
0 press d
20 press space
45 press lshift
90 press space
120 release lshift
150 press space
200 release d
230 press a
260 release a
";

impl InputScript {
    pub fn parse(text: &str, bindings: &KeyBindings) -> Result<Self, ScriptError> {
        let mut events = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            let (Some(tick), Some(verb), Some(key), None) =
                (parts.next(), parts.next(), parts.next(), parts.next())
            else {
                return Err(ScriptError::Malformed { line });
            };

            let tick: u64 = tick.parse().map_err(|_| ScriptError::InvalidTick {
                line,
                value: tick.to_string(),
            })?;
            let action = bindings
                .action_for(key)
                .ok_or_else(|| ScriptError::UnboundKey {
                    line,
                    key: key.to_string(),
                })?;
            let event = match verb.to_ascii_lowercase().as_str() {
                "press" => InputEvent::Pressed(action),
                "release" => InputEvent::Released(action),
                _ => {
                    return Err(ScriptError::UnknownVerb {
                        line,
                        verb: verb.to_string(),
                    });
                }
            };
            events.push((tick, event));
        }
        // Stable: same-tick events keep their file order.
        events.sort_by_key(|(tick, _)| *tick);
        tracing::debug!(events = events.len(), "parsed input script");
        Ok(Self { events })
    }

    pub fn demo() -> Self {
        // The demo text is a constant bound against the default layout.
        match Self::parse(DEMO_SCRIPT, &KeyBindings::default()) {
            Ok(script) => script,
            Err(_) => Self::default(),
        }
    }

    pub fn events_at(&self, tick: u64) -> impl Iterator<Item = InputEvent> + '_ {
        self.events
            .iter()
            .filter(move |(t, _)| *t == tick)
            .map(|(_, e)| *e)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Tick of the final event, if any.
    pub fn last_tick(&self) -> Option<u64> {
        self.events.last().map(|(t, _)| *t)
    }
}
