use std::io;

use digest::Digest;

use crate::ObjectId;

/// Streaming SHA-1 computation.
///
/// Data can be fed incrementally with [`update`](Hasher::update) or through
/// the [`std::io::Write`] implementation, then finalised into an
/// [`ObjectId`]. Finalising consumes the hasher, so a digest is only ever
/// observed once all input has been absorbed.
#[derive(Clone, Default)]
pub struct Hasher {
    inner: sha1::Sha1,
}

impl Hasher {
    /// Create a new hasher with an empty state.
    pub fn new() -> Self {
        Self {
            inner: sha1::Sha1::new(),
        }
    }

    /// Feed data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalize and return the ObjectId.
    pub fn finalize(self) -> ObjectId {
        ObjectId::new(self.inner.finalize().into())
    }

    /// Convenience: hash a contiguous buffer in one call.
    pub fn digest(data: &[u8]) -> ObjectId {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }

    /// Hash a chain of byte segments as if they were one contiguous buffer.
    ///
    /// Segments are consumed once, in iteration order, and fed straight into
    /// the running state; they are never joined. Empty segments and empty
    /// chains are fine: the result always equals [`Hasher::digest`] of the
    /// concatenation.
    ///
    /// ```
    /// use eden_hash::Hasher;
    ///
    /// let chain: [&[u8]; 3] = [b"hello", b"", b" world"];
    /// assert_eq!(Hasher::digest_chain(chain), Hasher::digest(b"hello world"));
    /// ```
    pub fn digest_chain<I>(segments: I) -> ObjectId
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut h = Self::new();
        let mut count = 0usize;
        let mut total = 0usize;
        for segment in segments {
            let segment = segment.as_ref();
            h.update(segment);
            count += 1;
            total += segment.len();
        }
        let oid = h.finalize();
        tracing::trace!(segments = count, bytes = total, %oid, "digested segment chain");
        oid
    }

    /// Hash everything `reader` yields until EOF.
    ///
    /// A read error aborts the digest and is returned unchanged.
    pub fn digest_reader<R: io::Read>(mut reader: R) -> io::Result<ObjectId> {
        let mut h = Self::new();
        io::copy(&mut reader, &mut h)?;
        Ok(h.finalize())
    }
}

impl io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
