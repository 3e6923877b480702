use std::io::{self, Write};

use gatekeeper_types::Verdict;

/// Write the verdict as a single JSON line.
pub fn write_verdict(out: &mut impl Write, verdict: &Verdict) -> io::Result<()> {
    serde_json::to_writer(&mut *out, verdict)?;
    out.write_all(b"\n")?;
    out.flush()
}
