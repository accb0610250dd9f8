use reelview_model::ContentId;

/// User interaction with a page. Slider indices follow
/// [`PageView::sliders`](super::PageView::sliders).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Previous(usize),
    Next(usize),
    /// The page-change animation of a slider finished.
    TransitionFinished(usize),
    CardClicked { slider: usize, id: ContentId },
    /// Background click on the open overlay.
    OverlayDismissed,
}
