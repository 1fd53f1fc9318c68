use crate::config::MergeConfig;
use crate::types::ProvisionalSection;

/// Section Merger: fuse adjacent sections separated by an insignificant
/// vertical gap. The clusterer over-splits on borderline style signals; this
/// pass repairs those seams.
pub struct SectionMerger<'a> {
    config: &'a MergeConfig,
}

impl<'a> SectionMerger<'a> {
    pub fn new(config: &'a MergeConfig) -> Self {
        Self { config }
    }

    /// Forward scan with a nested lookahead. Each merge extends the running
    /// bounds, so the gap for the next candidate is measured against the
    /// already-extended section.
    ///
    /// Member markup is concatenated without de-duplication across the merge
    /// boundary; duplicate markup between fused sections is accepted.
    pub fn merge_close_sections(
        &self,
        sections: Vec<ProvisionalSection>,
    ) -> Vec<ProvisionalSection> {
        if sections.len() <= 1 {
            return sections;
        }

        let mut merged: Vec<ProvisionalSection> = Vec::new();
        let mut iter = sections.into_iter().peekable();

        while let Some(mut current) = iter.next() {
            while let Some(next) = iter.next_if(|next| {
                next.bounds.top - current.bounds.bottom() < self.config.max_merge_gap
            }) {
                self.fuse(&mut current, next);
            }
            merged.push(current);
        }

        merged
    }

    fn fuse(&self, current: &mut ProvisionalSection, next: ProvisionalSection) {
        current.bounds.height = next.bounds.top + next.bounds.height - current.bounds.top;
        current.bounds.width = current.bounds.width.max(next.bounds.width);

        current.members.extend(next.members);
        current.content.push(' ');
        current.content.push_str(&next.content);
        current.has_images = current.has_images || next.has_images;
        current.has_videos = current.has_videos || next.has_videos;
    }
}
