//! Operator-facing messages.
//!
//! Messages go to stdout and are mirrored to the tracing debug sink.

pub fn write(message: &str) {
    println!("{}", message);
    tracing::debug!("{}", message);
}

pub fn write_error(message: &str) {
    write(&format!("ERROR: {}", message));
}
