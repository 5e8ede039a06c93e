//! Free-text song filtering
//!
//! A song matches when its JSON form contains the query, ignoring case.
//! That covers every field at once (title, artist, album, year, duration)
//! and also the field names themselves, so a query such as `"title"` matches
//! every song.

use beat_core::Song;

/// Lazy, restartable view over songs matching a query
///
/// Nothing is copied or mutated. Each call to [`iter`](Self::iter) starts a
/// fresh pass over the underlying slice.
#[derive(Debug, Clone)]
pub struct SongFilter<'a> {
    songs: &'a [Song],
    needle: Option<String>,
}

impl<'a> SongFilter<'a> {
    /// Filter `songs` by `query`
    ///
    /// An empty or whitespace-only query matches everything. Any other query
    /// is matched as typed, surrounding spaces included.
    pub fn new(songs: &'a [Song], query: &str) -> Self {
        let needle = (!query.trim().is_empty()).then(|| query.to_lowercase());
        Self { songs, needle }
    }

    /// A filter that matches nothing
    pub fn empty() -> Self {
        Self {
            songs: &[],
            needle: None,
        }
    }

    /// Start a new pass over the matching songs
    pub fn iter(&self) -> FilterIter<'a, '_> {
        FilterIter {
            inner: self.songs.iter(),
            needle: self.needle.as_deref(),
        }
    }

    /// Whether the query is active
    pub fn is_filtering(&self) -> bool {
        self.needle.is_some()
    }

    /// Number of matching songs
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Whether no song matches
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Matching songs collected into an owned list
    pub fn to_vec(&self) -> Vec<Song> {
        self.iter().cloned().collect()
    }
}

impl<'a, 'f> IntoIterator for &'f SongFilter<'a> {
    type Item = &'a Song;
    type IntoIter = FilterIter<'a, 'f>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator produced by [`SongFilter::iter`]
#[derive(Debug, Clone)]
pub struct FilterIter<'a, 'f> {
    inner: std::slice::Iter<'a, Song>,
    needle: Option<&'f str>,
}

impl<'a> Iterator for FilterIter<'a, '_> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle;
        self.inner.by_ref().find(|song| matches(song, needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

fn matches(song: &Song, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    serde_json::to_string(song).is_ok_and(|json| json.to_lowercase().contains(needle))
}
