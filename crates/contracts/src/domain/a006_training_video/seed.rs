use super::aggregate::TrainingVideo;

const THUMBNAIL: &str = "https://placehold.co/300x170.png";

fn video(id: &str, title: &str, description: &str, duration: &str, progress: u8, locked: bool) -> TrainingVideo {
    TrainingVideo {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        duration: duration.into(),
        progress,
        locked,
        thumbnail_url: THUMBNAIL.into(),
    }
}

pub fn mock_training_videos() -> Vec<TrainingVideo> {
    vec![
        video(
            "VID001",
            "Introduction to Affiliate Marketing",
            "Learn the basics of affiliate marketing and how to get started with ProMillion.",
            "15:30",
            100,
            false,
        ),
        video(
            "VID002",
            "Understanding Your Dashboard",
            "A comprehensive guide to navigating and utilizing all features of your affiliate dashboard.",
            "22:10",
            75,
            false,
        ),
        video(
            "VID003",
            "Effective Promotion Strategies",
            "Discover proven techniques to maximize your reach and conversions.",
            "35:00",
            20,
            false,
        ),
        video(
            "VID004",
            "Advanced SEO for Affiliates",
            "Dive deep into SEO tactics to boost your organic traffic and sales.",
            "45:50",
            0,
            true,
        ),
        video(
            "VID005",
            "Analyzing Your Performance",
            "Learn how to interpret your earnings reports and optimize your campaigns.",
            "18:25",
            0,
            true,
        ),
    ]
}
