//! Output rendering

use std::io::Write;

use llh_core::EcefCoordinate;

use crate::error::Result;

/// Write one `ECEF <axis>: <value> km` line per axis.
///
/// Values use the shortest round-trip `f64` rendering.
pub fn write_text<W: Write>(out: &mut W, ecef: &EcefCoordinate) -> Result<()> {
    writeln!(out, "ECEF X: {:?} km", ecef.x_km)?;
    writeln!(out, "ECEF Y: {:?} km", ecef.y_km)?;
    writeln!(out, "ECEF Z: {:?} km", ecef.z_km)?;
    Ok(())
}

/// Write the coordinate as a single-line JSON object.
pub fn write_json<W: Write>(out: &mut W, ecef: &EcefCoordinate) -> Result<()> {
    serde_json::to_writer(&mut *out, ecef)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ecef: &EcefCoordinate, json: bool) -> String {
        let mut buf = Vec::new();
        if json {
            write_json(&mut buf, ecef).unwrap();
        } else {
            write_text(&mut buf, ecef).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_lines() {
        let ecef = EcefCoordinate {
            x_km: 6378.1363,
            y_km: 0.0,
            z_km: -1200.5,
        };

        assert_eq!(
            render(&ecef, false),
            "ECEF X: 6378.1363 km\nECEF Y: 0.0 km\nECEF Z: -1200.5 km\n"
        );
    }

    #[test]
    fn test_text_keeps_full_precision() {
        let ecef = EcefCoordinate {
            x_km: -1200.7374276498556,
            y_km: -4815.894781000916,
            z_km: 3992.3165684317655,
        };

        let text = render(&ecef, false);
        assert!(text.contains("ECEF X: -1200.7374276498556 km"));
        assert!(text.contains("ECEF Y: -4815.894781000916 km"));
        assert!(text.contains("ECEF Z: 3992.3165684317655 km"));
    }

    #[test]
    fn test_json_object() {
        let ecef = EcefCoordinate {
            x_km: 1.5,
            y_km: -2.0,
            z_km: 0.25,
        };

        assert_eq!(
            render(&ecef, true),
            "{\"x_km\":1.5,\"y_km\":-2.0,\"z_km\":0.25}\n"
        );
    }
}
