use serde::{Deserialize, Serialize};

use crate::domain::common::{update_by_id, AggregateRoot};

pub const COMPLETE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingVideo {
    pub id: String,
    pub title: String,
    pub description: String,
    /// "mm:ss"
    pub duration: String,
    /// 0..=100
    pub progress: u8,
    pub locked: bool,
    pub thumbnail_url: String,
}

impl TrainingVideo {
    pub fn is_selectable(&self) -> bool {
        !self.locked
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= COMPLETE
    }

    /// Playlist caption
    pub fn status_label(&self) -> String {
        if self.locked {
            "Locked".to_string()
        } else if self.is_complete() {
            "Completed".to_string()
        } else {
            format!("{}% Watched", self.progress)
        }
    }
}

impl AggregateRoot for TrainingVideo {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "training_video"
    }

    fn element_name() -> &'static str {
        "Training Video"
    }

    fn list_name() -> &'static str {
        "Course Playlist"
    }

    fn empty_message() -> &'static str {
        "Select a video to start learning."
    }
}

/// Player + playlist state of the training page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingCourse {
    videos: Vec<TrainingVideo>,
    selected: Option<String>,
}

impl TrainingCourse {
    /// First video starts selected
    pub fn new(videos: Vec<TrainingVideo>) -> Self {
        let selected = videos.first().map(|v| v.id.clone());
        Self { videos, selected }
    }

    pub fn videos(&self) -> &[TrainingVideo] {
        &self.videos
    }

    pub fn selected(&self) -> Option<&TrainingVideo> {
        let id = self.selected.as_deref()?;
        self.videos.iter().find(|v| v.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Locked or unknown videos are ignored
    pub fn select(&mut self, id: &str) -> bool {
        match self.videos.iter().find(|v| v.id == id) {
            Some(v) if v.is_selectable() => {
                self.selected = Some(v.id.clone());
                true
            }
            _ => false,
        }
    }

    /// Progress → 100 for the matching video only
    pub fn mark_complete(&mut self, id: &str) -> bool {
        update_by_id(&mut self.videos, id, |v| v.progress = COMPLETE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_training_video::seed::mock_training_videos;

    #[test]
    fn test_initial_selection() {
        let course = TrainingCourse::new(mock_training_videos());
        assert_eq!(course.selected().map(|v| v.id.as_str()), Some("VID001"));
        assert!(TrainingCourse::new(vec![]).selected().is_none());
    }

    #[test]
    fn test_locked_video_not_selectable() {
        let mut course = TrainingCourse::new(mock_training_videos());
        assert!(!course.select("VID004"));
        assert!(course.is_selected("VID001"));
        assert!(course.select("VID003"));
        assert!(course.is_selected("VID003"));
    }

    #[test]
    fn test_mark_complete_updates_selected_too() {
        let mut course = TrainingCourse::new(mock_training_videos());
        course.select("VID002");
        assert!(course.mark_complete("VID002"));
        assert_eq!(course.selected().map(|v| v.progress), Some(100));
        let progress: Vec<u8> = course.videos().iter().map(|v| v.progress).collect();
        assert_eq!(progress, vec![100, 100, 20, 0, 0]);
    }

    #[test]
    fn test_status_labels() {
        let labels: Vec<String> = mock_training_videos()
            .iter()
            .map(|v| v.status_label())
            .collect();
        assert_eq!(
            labels,
            vec!["Completed", "75% Watched", "20% Watched", "Locked", "Locked"]
        );
    }
}
