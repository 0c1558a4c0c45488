use std::io::{self, Write};

use crate::display::DisplaySlots;

// Write the display panel. Text content only; the rssi slot already
// carries its own "RSSI: .. dBm" label.
pub(crate) fn draw<W: Write>(out: &mut W, slots: &DisplaySlots) -> io::Result<()> {
    writeln!(out, "Temperature : {}", slots.temp)?;
    writeln!(out, "Humidity    : {}", slots.humidity)?;
    writeln!(out, "Device      : {}", slots.device)?;
    writeln!(out, "{}", slots.rssi)?;
    writeln!(out, "Updated     : {}", slots.updated)?;
    writeln!(out)?;
    Ok(())
}
