use thiserror::Error;

/// A failed draw. Both variants are non-fatal: the display text becomes the
/// state's user-visible message and the draft stays resumable.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("no available creature found after too many attempts")]
    PoolExhausted { attempts: u32 },

    #[error("could not load the creature")]
    Fetch {
        #[source]
        source: anyhow::Error,
    },
}
