//! Tickets and receipts
//!
//! Value objects handed to the caller on park/unpark. The engine keeps no
//! reference to them; a ticket must be presented again to unpark.
//!
//! `Display` renders the printable form:
//!
//! ```text
//! Parking Ticket:
//!  Ticket Number: 001
//!  Spot Number: 1
//!  Entry Date-time: 29-May-2022 14:04:07
//! ```

use crate::core_types::{Fee, ReceiptNumber, SpotNumber, TicketNumber};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// `dd-MMM-yyyy HH:mm:ss`
pub const DATE_TIME_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

/// Proof of entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    number: TicketNumber,
    spot: SpotNumber,
    entry: NaiveDateTime,
}

impl Ticket {
    pub(crate) fn new(number: TicketNumber, spot: SpotNumber, entry: NaiveDateTime) -> Self {
        Self {
            number,
            spot,
            entry,
        }
    }

    #[inline]
    pub fn number(&self) -> TicketNumber {
        self.number
    }

    #[inline]
    pub fn spot(&self) -> SpotNumber {
        self.spot
    }

    #[inline]
    pub fn entry(&self) -> NaiveDateTime {
        self.entry
    }

    /// Printable ticket number, zero-padded to 3 digits
    pub fn label(&self) -> String {
        format!("{:03}", self.number)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parking Ticket:\n Ticket Number: {}\n Spot Number: {}\n Entry Date-time: {}",
            self.label(),
            self.spot,
            self.entry.format(DATE_TIME_FORMAT)
        )
    }
}

/// Proof of exit with the computed fee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    number: ReceiptNumber,
    entry: NaiveDateTime,
    exit: NaiveDateTime,
    fee: Fee,
}

impl Receipt {
    pub(crate) fn new(
        number: ReceiptNumber,
        entry: NaiveDateTime,
        exit: NaiveDateTime,
        fee: Fee,
    ) -> Self {
        Self {
            number,
            entry,
            exit,
            fee,
        }
    }

    #[inline]
    pub fn number(&self) -> ReceiptNumber {
        self.number
    }

    #[inline]
    pub fn entry(&self) -> NaiveDateTime {
        self.entry
    }

    #[inline]
    pub fn exit(&self) -> NaiveDateTime {
        self.exit
    }

    #[inline]
    pub fn fee(&self) -> Fee {
        self.fee
    }

    /// Printable receipt number (`R-001`)
    pub fn label(&self) -> String {
        format!("R-{:03}", self.number)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parking Receipt:\n Receipt Number: {}\n Entry Date-time: {}\n Exit Date-time: {}\n Fees: {}",
            self.label(),
            self.entry.format(DATE_TIME_FORMAT),
            self.exit.format(DATE_TIME_FORMAT),
            self.fee
        )
    }
}
