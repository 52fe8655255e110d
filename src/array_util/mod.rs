use std::convert::TryInto;


/// Copies the ``source`` array to the ``dest`` array with respect to endianness. ``source`` must be at least four
/// times bigger than ``dest``, otherwise this function panics. Data from ``source`` will be treated as big endian
/// integers, surplus bytes are ignored.
pub fn align_to_u32a_be(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (dword, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *dword = u32::from_be_bytes(bytes.try_into().unwrap());
    }
}

/// Writes the ``source`` words into ``dest`` as big endian integers. ``dest`` must be at least four times bigger than
/// ``source``, otherwise this function panics.
pub fn u32a_to_bytes_be(source: &[u32], dest: &mut [u8]) {
    assert!(dest.len() >= source.len() * 4);

    for (bytes, dword) in dest.chunks_exact_mut(4).zip(source.iter()) {
        bytes.copy_from_slice(&dword.to_be_bytes());
    }
}
