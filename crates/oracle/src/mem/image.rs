//! Raw Memory Image Implementation.
//!
//! This module provides a safe wrapper around raw memory allocation for the
//! flat backing image the simulated core executes against. It supports lazy
//! allocation via `mmap` on Unix systems to optimize host memory usage and
//! startup time for large configurations. The image is word-granular: it is
//! the plain memory the device-under-test's bus-facing side always sees
//! verbatim, with no interaction with the consistency model.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::common::constants::WORD_BYTES;

/// A simplified wrapper around a raw word-granular memory buffer.
///
/// On Unix systems, this uses `mmap` to allocate anonymous memory, which
/// allows for lazy allocation (pages are only committed by the OS when
/// accessed). This significantly improves startup time and memory pressure
/// for large image sizes.
pub struct ImageBuffer {
    ptr: *mut u32,
    words: usize,
    is_mmap: bool,
}

// SAFETY: the buffer owns its allocation exclusively; callers serialize
// access per the oracle's single-threaded contract.
unsafe impl Send for ImageBuffer {}
unsafe impl Sync for ImageBuffer {}

impl ImageBuffer {
    /// Creates a new zero-filled image of the specified word count.
    ///
    /// On Unix, uses `mmap` for lazy allocation; on other platforms,
    /// allocates a `Vec`.
    ///
    /// # Arguments
    ///
    /// * `words` - Size of the image in 32-bit words.
    ///
    /// # Returns
    ///
    /// A new `ImageBuffer`; panics if `mmap` fails on Unix.
    pub fn new(words: usize) -> Self {
        #[cfg(unix)]
        {
            use std::ptr;
            let size = words * WORD_BYTES;
            // SAFETY: anonymous private mapping with no backing file; the
            // returned region is owned by this buffer until Drop.
            let ptr = unsafe {
                libc::mmap(
                    ptr::null_mut(),
                    size,
                    libc::PROT_READ | libc::PROT_WRITE,
                    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                    -1,
                    0,
                )
            };

            assert!(
                ptr != libc::MAP_FAILED,
                "Failed to mmap image buffer of {} words",
                words
            );

            Self {
                ptr: ptr.cast::<u32>(),
                words,
                is_mmap: true,
            }
        }

        #[cfg(not(unix))]
        {
            let mut vec = vec![0u32; words];
            let ptr = vec.as_mut_ptr();
            std::mem::forget(vec);
            Self {
                ptr,
                words,
                is_mmap: false,
            }
        }
    }

    /// Returns the size of the image in words.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` when the image holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Reads a single word safely.
    ///
    /// # Arguments
    ///
    /// * `index` - Word index; must be below the image word count.
    pub fn read_word(&self, index: usize) -> u32 {
        assert!(index < self.words, "image read out of bounds");
        // SAFETY: bounds asserted above; the allocation is live for &self.
        unsafe { *self.ptr.add(index) }
    }

    /// Writes a single word safely.
    ///
    /// Interior mutability mirrors the hardware view: the image is a shared
    /// backing array the simulated core writes through while checks read it.
    ///
    /// # Arguments
    ///
    /// * `index` - Word index; must be below the image word count.
    /// * `value` - Word to store.
    pub fn write_word(&self, index: usize, value: u32) {
        assert!(index < self.words, "image write out of bounds");
        // SAFETY: bounds asserted above; callers serialize access.
        unsafe {
            *self.ptr.add(index) = value;
        }
    }
}

impl Drop for ImageBuffer {
    /// Deallocates the image buffer.
    ///
    /// On Unix systems, unmaps the mmap'd memory. On other systems,
    /// reconstructs the Vec to trigger its destructor.
    fn drop(&mut self) {
        if self.is_mmap {
            #[cfg(unix)]
            // SAFETY: ptr/size are exactly the mapping created in new().
            unsafe {
                let _ = libc::munmap(self.ptr.cast(), self.words * WORD_BYTES);
            }
        } else {
            #[cfg(not(unix))]
            // SAFETY: ptr/len/capacity are exactly the Vec forgotten in new().
            unsafe {
                let _ = Vec::from_raw_parts(self.ptr, self.words, self.words);
            }
        }
    }
}

impl Index<usize> for ImageBuffer {
    /// Output type for indexing operations (u32).
    type Output = u32;

    /// Indexes into the image to read a word.
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < self.words, "image read out of bounds");
        // SAFETY: bounds asserted above.
        unsafe { &*self.ptr.add(index) }
    }
}

impl IndexMut<usize> for ImageBuffer {
    /// Indexes into the image to write a word.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index < self.words, "image write out of bounds");
        // SAFETY: bounds asserted above; &mut self gives exclusive access.
        unsafe { &mut *self.ptr.add(index) }
    }
}

impl fmt::Debug for ImageBuffer {
    /// Formats the image geometry without dumping its contents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("words", &self.words)
            .field("is_mmap", &self.is_mmap)
            .finish()
    }
}
