// THEORY:
// The `Pixel` module holds the two "dumb" data containers the counter is built on.
//
// 1.  **ColorSample**: the raw RGB triple handed over by a `PixelSource`. Channels are
//     stored as `u16` so that both 8-bit and 16-bit sources fit without conversion;
//     the source declares its own channel maximum and the `Binarizer` normalizes.
// 2.  **PixelRecord**: one cell of the `BinarizedGrid`. It remembers where it lives,
//     which side of the threshold it fell on, and how far the scanner has got with it.
//
// The traversal state only ever moves forward: `Free -> Reserved -> Watched`. A record
// that is no longer `Free` is never queued again, which is what keeps the scan linear
// and guarantees that every dark pixel is counted exactly once.

pub mod pixel {
    pub type Channel = u16;
    pub type Coordinate = u32;

    /// The channel maximum of an ordinary 8-bit RGB image.
    pub const CHANNEL_MAX_8BIT: Channel = u8::MAX as Channel;

    /// A single RGB sample as read from a `PixelSource`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ColorSample {
        pub red: Channel,
        pub green: Channel,
        pub blue: Channel,
    }

    impl ColorSample {
        pub fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Self { red, green, blue }
        }

        pub fn channels(&self) -> [Channel; 3] {
            [self.red, self.green, self.blue]
        }

        /// The brightest of the three channels.
        pub fn max_channel(&self) -> Channel {
            self.red.max(self.green).max(self.blue)
        }
    }

    impl From<[u8; 3]> for ColorSample {
        fn from(rgb: [u8; 3]) -> Self {
            Self::new(rgb[0].into(), rgb[1].into(), rgb[2].into())
        }
    }

    impl From<[u16; 3]> for ColorSample {
        fn from(rgb: [u16; 3]) -> Self {
            Self::new(rgb[0], rgb[1], rgb[2])
        }
    }

    /// Binary classification of a pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ColorClass {
        /// Background.
        Light,
        /// Part of a silhouette.
        Dark,
    }

    /// Traversal state of a grid cell. Ordered so that transitions can be checked
    /// for monotonicity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub enum PixelState {
        /// Not yet seen by the scanner.
        #[default]
        Free,
        /// Sitting in one of the scanner's queues.
        Reserved,
        /// Dequeued and fully processed.
        Watched,
    }

    /// One cell of the binarized grid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PixelRecord {
        pub x: Coordinate,
        pub y: Coordinate,
        pub class: ColorClass,
        state: PixelState,
    }

    impl PixelRecord {
        pub fn new(x: Coordinate, y: Coordinate, class: ColorClass) -> Self {
            Self {
                x,
                y,
                class,
                state: PixelState::Free,
            }
        }

        pub fn state(&self) -> PixelState {
            self.state
        }

        pub fn is_free(&self) -> bool {
            self.state == PixelState::Free
        }

        pub fn is_dark(&self) -> bool {
            self.class == ColorClass::Dark
        }

        /// Marks the record as queued. Only a `Free` record may be reserved.
        pub(crate) fn reserve(&mut self) {
            debug_assert_eq!(self.state, PixelState::Free, "pixel ({}, {}) queued twice", self.x, self.y);
            self.state = PixelState::Reserved;
        }

        /// Marks the record as fully processed.
        pub(crate) fn watch(&mut self) {
            debug_assert_ne!(self.state, PixelState::Watched, "pixel ({}, {}) processed twice", self.x, self.y);
            self.state = PixelState::Watched;
        }
    }
}
