//! Built-in demo script used when `create` is given no `--script`

/// Bash snippet embedded into the descriptor by default.
///
/// The `date +%Y-%m-%d %H:%M:%S` calls are unquoted, so `date` sees the time
/// part as an extra operand. Kept as-is; it is fixture text, not something the
/// descriptor writer interprets.
pub const DEMO_SCRIPT: &str = r##"#!/bin/bash

# Log file path
: "${LOG_FILE:=script.log}"

# Function to log a message with timestamp and arguments
log_message() {
  local timestamp=$(date +%Y-%m-%d %H:%M:%S)
  echo "[$timestamp] $* " >> "$LOG_FILE"
}
echo "$(date +%Y-%m-%d %H:%M:%S) : $*" >> /tmp/panel_log.log

log_message
echo "The package was installed."
"##;

/// Execute the demo-script command
pub fn execute() {
    print!("{}", DEMO_SCRIPT);
}
