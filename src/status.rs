/// The SHT85 status register.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub u16);

impl Status {
    const ALERT_PENDING: u16 = 1 << 15;
    const HEATER_ON: u16 = 1 << 13;
    const HUMIDITY_ALERT: u16 = 1 << 11;
    const TEMPERATURE_ALERT: u16 = 1 << 10;
    const RESET_DETECTED: u16 = 1 << 4;
    const COMMAND_FAILED: u16 = 1 << 1;
    const WRITE_CHECKSUM_FAILED: u16 = 1 << 0;

    /// The raw register value.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// At least one alert is pending.
    pub fn alert_pending(self) -> bool {
        self.0 & Self::ALERT_PENDING != 0
    }

    pub fn heater_on(self) -> bool {
        self.0 & Self::HEATER_ON != 0
    }

    pub fn humidity_alert(self) -> bool {
        self.0 & Self::HUMIDITY_ALERT != 0
    }

    pub fn temperature_alert(self) -> bool {
        self.0 & Self::TEMPERATURE_ALERT != 0
    }

    /// A reset (power on, soft reset or general call) happened since the last clear status command.
    pub fn reset_detected(self) -> bool {
        self.0 & Self::RESET_DETECTED != 0
    }

    /// The last command was invalid or failed its checksum and was not processed.
    pub fn command_failed(self) -> bool {
        self.0 & Self::COMMAND_FAILED != 0
    }

    /// The checksum of the last write transfer failed.
    pub fn write_checksum_failed(self) -> bool {
        self.0 & Self::WRITE_CHECKSUM_FAILED != 0
    }

    // Logs a warning for every raised flag.
    pub(crate) fn log_raised_flags(self) {
        if self.write_checksum_failed() {
            log::warn!("Checksum of last write transfer failed");
        }
        if self.command_failed() {
            log::warn!("Last command not processed, it was invalid or failed its checksum");
        }
        if self.reset_detected() {
            log::warn!("Reset detected since last clear status command");
        }
        if self.temperature_alert() {
            log::warn!("Temperature tracking alert");
        }
        if self.humidity_alert() {
            log::warn!("Humidity tracking alert");
        }
        if self.heater_on() {
            log::warn!("Heater is on");
        }
        if self.alert_pending() {
            log::warn!("At least one alert pending");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_register_has_no_flags() {
        let status = Status(0x0000);
        assert!(!status.alert_pending());
        assert!(!status.heater_on());
        assert!(!status.humidity_alert());
        assert!(!status.temperature_alert());
        assert!(!status.reset_detected());
        assert!(!status.command_failed());
        assert!(!status.write_checksum_failed());
    }

    #[test]
    fn power_on_default() {
        // alert pending and reset detected are set after power up
        let status = Status(0x8010);
        assert!(status.alert_pending());
        assert!(status.reset_detected());
        assert!(!status.heater_on());
    }

    #[test]
    fn individual_flags() {
        assert!(Status(0x2000).heater_on());
        assert!(Status(0x0800).humidity_alert());
        assert!(Status(0x0400).temperature_alert());
        assert!(Status(0x0002).command_failed());
        assert!(Status(0x0001).write_checksum_failed());
        assert_eq!(Status(0x2001).bits(), 0x2001);
    }
}
