/// Encoder trait for converting a value of type `T` into its encoded form `E`.
///
/// The reverse of [`Decoder`](crate::decoder::Decoder); used to armor raw
/// packet bytes.
pub trait Encoder<T, E: EncodableTo<T>> {
    type Error;

    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that `Self` is an encoding of `T`.
pub trait EncodableTo<T> {}
