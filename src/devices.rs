use std::cell::RefCell;

use thiserror::Error;

/// The value every device capability operates on
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub body: String,
}

impl Document {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Errors from the monolithic-interface variant
#[derive(Error, Debug, PartialEq)]
pub enum DeviceError {
    #[error("{device} does not support {operation}")]
    Unsupported {
        device: &'static str,
        operation: &'static str,
    },
}

// =============================================================================
// Anti-pattern: one fat Machine interface
//
// Every implementer must answer for print, fax, and scan, whether or not the
// hardware can. Unsupported operations surface as call-time errors.
// =============================================================================

pub trait Machine {
    fn print(&self, document: &Document) -> Result<(), DeviceError>;
    fn fax(&self, document: &Document) -> Result<(), DeviceError>;
    fn scan(&self, document: &Document) -> Result<(), DeviceError>;
}

/// Fine under the fat interface: this device genuinely does all three
#[derive(Default)]
pub struct MultiFunctionPrinter {
    handled: RefCell<Vec<String>>,
}

impl MultiFunctionPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations performed, in order, as "op title" strings
    pub fn handled(&self) -> Vec<String> {
        self.handled.borrow().clone()
    }
}

impl Machine for MultiFunctionPrinter {
    fn print(&self, document: &Document) -> Result<(), DeviceError> {
        self.handled.borrow_mut().push(format!("print {}", document.title));
        Ok(())
    }

    fn fax(&self, document: &Document) -> Result<(), DeviceError> {
        self.handled.borrow_mut().push(format!("fax {}", document.title));
        Ok(())
    }

    fn scan(&self, document: &Document) -> Result<(), DeviceError> {
        self.handled.borrow_mut().push(format!("scan {}", document.title));
        Ok(())
    }
}

/// The victim of the fat interface: can only print, yet must stub the rest
#[derive(Default)]
pub struct OldFashionedPrinter {
    printed: RefCell<Vec<String>>,
}

impl OldFashionedPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn printed(&self) -> Vec<String> {
        self.printed.borrow().clone()
    }
}

impl Machine for OldFashionedPrinter {
    fn print(&self, document: &Document) -> Result<(), DeviceError> {
        self.printed.borrow_mut().push(document.title.clone());
        Ok(())
    }

    /// Silent no-op: the caller has no way to tell nothing happened
    fn fax(&self, _document: &Document) -> Result<(), DeviceError> {
        Ok(())
    }

    fn scan(&self, _document: &Document) -> Result<(), DeviceError> {
        Err(DeviceError::Unsupported {
            device: "OldFashionedPrinter",
            operation: "scan",
        })
    }
}

// =============================================================================
// Corrected design: one role trait per capability
//
// A device declares only what it supports. Calling an absent capability is a
// compile error, so no runtime "unsupported" check exists at all.
// =============================================================================

pub trait Printer {
    fn print(&self, document: &Document);
}

pub trait Scanner {
    fn scan(&self, document: &Document);
}

pub trait Fax {
    fn fax(&self, document: &Document);
}

/// Fax-only provider; records dialed transmissions
#[derive(Default)]
pub struct FaxModem {
    sent: RefCell<Vec<String>>,
}

impl FaxModem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl Fax for FaxModem {
    fn fax(&self, document: &Document) {
        self.sent.borrow_mut().push(document.title.clone());
    }
}

/// Print-only provider; records completed jobs
#[derive(Default)]
pub struct InkjetPrinter {
    jobs: RefCell<Vec<String>>,
}

impl InkjetPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> Vec<String> {
        self.jobs.borrow().clone()
    }
}

impl Printer for InkjetPrinter {
    fn print(&self, document: &Document) {
        self.jobs.borrow_mut().push(document.title.clone());
    }
}

/// Scan-only provider; records completed scans
#[derive(Default)]
pub struct FlatbedScanner {
    scans: RefCell<Vec<String>>,
}

impl FlatbedScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scans(&self) -> Vec<String> {
        self.scans.borrow().clone()
    }
}

impl Scanner for FlatbedScanner {
    fn scan(&self, document: &Document) {
        self.scans.borrow_mut().push(document.title.clone());
    }
}

/// Implements two roles directly, no delegation needed
#[derive(Default)]
pub struct Photocopier {
    jobs: RefCell<Vec<String>>,
}

impl Photocopier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> Vec<String> {
        self.jobs.borrow().clone()
    }
}

impl Printer for Photocopier {
    fn print(&self, document: &Document) {
        self.jobs.borrow_mut().push(format!("print {}", document.title));
    }
}

impl Scanner for Photocopier {
    fn scan(&self, document: &Document) {
        self.jobs.borrow_mut().push(format!("scan {}", document.title));
    }
}

/// Composite device: borrows one provider per capability and delegates.
/// It can only be constructed with a real provider for each role it exposes,
/// so an unsupported capability cannot exist here by construction.
pub struct MultiFunctionMachine<'a> {
    printer: &'a dyn Printer,
    scanner: &'a dyn Scanner,
}

impl<'a> MultiFunctionMachine<'a> {
    pub fn new(printer: &'a dyn Printer, scanner: &'a dyn Scanner) -> Self {
        Self { printer, scanner }
    }
}

impl Printer for MultiFunctionMachine<'_> {
    fn print(&self, document: &Document) {
        self.printer.print(document);
    }
}

impl Scanner for MultiFunctionMachine<'_> {
    fn scan(&self, document: &Document) {
        self.scanner.scan(document);
    }
}

// =============================================================================
// Tests
// =============================================================================
