//! In-memory I2C bus, panel model and delay source for unit tests.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{Error, ErrorKind, ErrorType, I2c, Operation};

use crate::layout::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Bytes in one 128×32 frame: four 8-row pages of 128 columns.
const FRAME_BYTES: usize = (DISPLAY_WIDTH * DISPLAY_HEIGHT / 8) as usize;

/// SSD1306 control bytes as sent by `display-interface-i2c`.
const COMMAND: u8 = 0x00;
const DATA: u8 = 0x40;

/// Panel RAM as the controller sees it in horizontal addressing mode.
///
/// Tracks the column/page window set by `0x21`/`0x22` and advances a cursor
/// through it for every data byte, wrapping at the window edges.
struct Panel {
    ram: Vec<u8>,
    columns: (u8, u8),
    pages: (u8, u8),
    cursor: (u8, u8),
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            ram: vec![0; 8 * DISPLAY_WIDTH as usize],
            columns: (0, 127),
            pages: (0, 7),
            cursor: (0, 0),
        }
    }
}

impl Panel {
    fn receive(&mut self, bytes: &[u8]) {
        match bytes {
            [COMMAND, 0x21, start, end] => {
                self.columns = (*start, *end);
                self.cursor.0 = *start;
            }
            [COMMAND, 0x22, start, end] => {
                self.pages = (*start, *end);
                self.cursor.1 = *start;
            }
            [DATA, data @ ..] => data.iter().for_each(|&b| self.put(b)),
            _ => {}
        }
    }

    fn put(&mut self, byte: u8) {
        let (column, page) = self.cursor;
        let index = page as usize * DISPLAY_WIDTH as usize + column as usize;
        if let Some(cell) = self.ram.get_mut(index) {
            *cell = byte;
        }

        if column >= self.columns.1 {
            self.cursor.0 = self.columns.0;
            self.cursor.1 = if page >= self.pages.1 { self.pages.0 } else { page + 1 };
        } else {
            self.cursor.0 = column + 1;
        }
    }
}

#[derive(Default)]
struct Inner {
    writes: Vec<(u8, Vec<u8>)>,
    delays_ms: Vec<u32>,
    panel: Panel,
    fail: bool,
}

/// Shared record of bus writes and delays.
#[derive(Clone, Default)]
pub struct BusLog(Rc<RefCell<Inner>>);

impl BusLog {
    /// Every write as `(address, bytes)`, in order.
    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.0.borrow().writes.clone()
    }

    /// Visible panel RAM in SSD1306 page layout, rebuilt from the bytes
    /// sent so far.
    pub fn panel(&self) -> Vec<u8> {
        self.0.borrow().panel.ram[..FRAME_BYTES].to_vec()
    }

    /// Payloads of every data write from the `from`-th bus write onward.
    pub fn data_since(&self, from: usize) -> Vec<u8> {
        self.0
            .borrow()
            .writes
            .iter()
            .skip(from)
            .filter_map(|(_, bytes)| match bytes.split_first() {
                Some((&DATA, data)) => Some(data),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    pub fn delays_ms(&self) -> Vec<u32> {
        self.0.borrow().delays_ms.clone()
    }

    /// Make every following transaction fail (or succeed again).
    pub fn fail(&self, fail: bool) {
        self.0.borrow_mut().fail = fail;
    }
}

#[derive(Debug)]
pub struct I2cFault;

impl Error for I2cFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// I2C bus that records writes and answers reads with zeros.
pub struct FakeI2c {
    log: BusLog,
}

impl FakeI2c {
    pub fn new(log: &BusLog) -> Self {
        Self { log: log.clone() }
    }
}

impl ErrorType for FakeI2c {
    type Error = I2cFault;
}

impl I2c for FakeI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut inner = self.log.0.borrow_mut();
        if inner.fail {
            return Err(I2cFault);
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    inner.writes.push((address, bytes.to_vec()));
                    inner.panel.receive(&bytes[..]);
                }
                Operation::Read(buffer) => buffer.fill(0),
            }
        }
        Ok(())
    }
}

/// Delay source that returns immediately and records the hold time.
pub struct FakeDelay {
    log: BusLog,
}

impl FakeDelay {
    pub fn new(log: &BusLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.0.borrow_mut().delays_ms.push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.0.borrow_mut().delays_ms.push(ms);
    }
}

/// Reference frame in SSD1306 page layout, drawn with `embedded-graphics`
/// to compare against [`BusLog::panel`].
pub struct Frame(Vec<u8>);

impl Frame {
    pub fn new() -> Self {
        Self(vec![0; FRAME_BYTES])
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
                continue;
            }
            let index = (y / 8 * DISPLAY_WIDTH + x) as usize;
            let bit = 1 << (y % 8);
            if color.is_on() {
                self.0[index] |= bit;
            } else {
                self.0[index] &= !bit;
            }
        }
        Ok(())
    }
}
