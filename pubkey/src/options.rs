/// Default cap on the armored text accepted by a single parse.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;

/// How the bit length of an MPI is turned into a byte count.
///
/// OpenPGP stores the length of an MPI in bits while the integer itself is
/// byte aligned. `Ceil` reads every byte the integer occupies. `Truncate`
/// divides by eight and drops the partial leading byte, which is what older
/// readers did; it loses data for any integer whose bit length is not a
/// multiple of 8 (a 17 bit exponent such as 65537 is read as 2 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MpiLength {
    #[default]
    Ceil,
    Truncate,
}

impl MpiLength {
    pub fn byte_len(self, bits: u16) -> usize {
        let bits = usize::from(bits);
        match self {
            MpiLength::Ceil => bits.div_ceil(8),
            MpiLength::Truncate => bits / 8,
        }
    }
}

/// Settings for a single key parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    max_input_len: usize,
    mpi_length: MpiLength,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            mpi_length: MpiLength::default(),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    pub fn with_mpi_length(mut self, mpi_length: MpiLength) -> Self {
        self.mpi_length = mpi_length;
        self
    }

    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    pub fn mpi_length(&self) -> MpiLength {
        self.mpi_length
    }
}
