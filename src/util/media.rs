//! `<audio>` element as a [`Playback`] primitive.

use crate::state::player::Playback;

/// Playback over an `HtmlAudioElement`.
#[derive(Clone, Debug)]
pub struct MediaElement {
    #[cfg(feature = "csr")]
    element: web_sys::HtmlAudioElement,
}

#[cfg(feature = "csr")]
impl MediaElement {
    pub fn new(element: web_sys::HtmlAudioElement) -> Self {
        Self { element }
    }
}

impl Playback for MediaElement {
    fn position(&self) -> f64 {
        #[cfg(feature = "csr")]
        {
            self.element.current_time()
        }
        #[cfg(not(feature = "csr"))]
        {
            0.0
        }
    }

    fn duration(&self) -> f64 {
        #[cfg(feature = "csr")]
        {
            self.element.duration()
        }
        #[cfg(not(feature = "csr"))]
        {
            f64::NAN
        }
    }

    fn is_paused(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.element.paused()
        }
        #[cfg(not(feature = "csr"))]
        {
            true
        }
    }

    fn play(&mut self) {
        // Autoplay policy rejects the returned promise and leaves the element paused.
        #[cfg(feature = "csr")]
        {
            if let Err(e) = self.element.play() {
                log::debug!("audio play() failed: {e:?}");
            }
        }
    }

    fn pause(&mut self) {
        #[cfg(feature = "csr")]
        {
            let _ = self.element.pause();
        }
    }

    fn set_position(&mut self, secs: f64) {
        #[cfg(feature = "csr")]
        {
            self.element.set_current_time(secs);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = secs;
        }
    }

    fn volume(&self) -> f64 {
        #[cfg(feature = "csr")]
        {
            self.element.volume()
        }
        #[cfg(not(feature = "csr"))]
        {
            1.0
        }
    }

    fn set_volume(&mut self, volume: f64) {
        #[cfg(feature = "csr")]
        {
            self.element.set_volume(volume);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = volume;
        }
    }
}
