use std::ops::Range;

pub(crate) fn line_up(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

pub(crate) fn line_down(cursor: usize, len: usize) -> usize {
    cursor.saturating_add(1).min(last_index(len))
}

pub(crate) fn page_up(cursor: usize, viewport_size: usize) -> usize {
    cursor.saturating_sub(viewport_size)
}

pub(crate) fn page_down(cursor: usize, viewport_size: usize, len: usize) -> usize {
    cursor.saturating_add(viewport_size).min(last_index(len))
}

pub(crate) fn last_index(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Units rendered around `cursor`: starts half a viewport above it and is
/// clamped at both document ends.
pub fn viewport_window(cursor: usize, viewport_size: usize, len: usize) -> Range<usize> {
    let start = cursor.saturating_sub(viewport_size / 2).min(len);
    let end = start.saturating_add(viewport_size).min(len);
    start..end
}

/// Next chunk start inside a page of `line_count` lines, or `None` when the
/// current chunk is the last one.
pub(crate) fn next_chunk(scroll: usize, chunk: usize, line_count: usize) -> Option<usize> {
    let next = scroll.saturating_add(chunk.max(1));
    (next < line_count).then_some(next)
}
