use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::domain::a006_training_video::aggregate::{TrainingCourse, TrainingVideo, COMPLETE};
use contracts::domain::a006_training_video::seed::mock_training_videos;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn status_icon(video: &TrainingVideo) -> &'static str {
    if video.locked {
        "lock"
    } else if video.is_complete() {
        "check-circle"
    } else {
        "youtube"
    }
}

/// Player for the selected video plus the course playlist.
///
/// Locked videos stay in the playlist but cannot be selected.
#[component]
#[allow(non_snake_case)]
pub fn TrainingPlayer() -> impl IntoView {
    let course = RwSignal::new(TrainingCourse::new(mock_training_videos()));
    let selected = Memo::new(move |_| course.with(|c| c.selected().cloned()));

    let select = move |id: String| {
        let mut changed = false;
        course.update(|c| changed = c.select(&id));
        if !changed {
            log::debug!("video {} is locked", id);
        }
    };

    let mark_complete = move |id: String| {
        let mut done = false;
        course.update(|c| done = c.mark_complete(&id));
        if done {
            log::info!("video {} marked complete", id);
        }
    };

    let player = move || match selected.get() {
        None => view! {
            <div class="video-player__empty">{TrainingVideo::empty_message()}</div>
        }
        .into_any(),
        Some(video) => {
            let id = video.id.clone();
            let progress = video.progress;
            view! {
                <div class="card__header">
                    <div>
                        <h3 class="card__title card__title--large">{video.title.clone()}</h3>
                        <p class="card__subtitle">{video.description.clone()}</p>
                    </div>
                </div>
                <div class="video-player__screen">
                    <img src=video.thumbnail_url.clone() alt=video.title.clone() />
                    <span class="video-player__play">{icon("play-circle")}</span>
                </div>
                <div class="video-player__meta">
                    <span>{format!("Progress: {}%", progress)}</span>
                    <span class="muted">{format!("Duration: {}", video.duration)}</span>
                </div>
                <div class="progress">
                    <div class="progress__bar" style=format!("width: {}%", progress)></div>
                </div>
                {(progress < COMPLETE).then(|| view! {
                    <Button size="sm" on_click=Callback::new(move |_| mark_complete(id.clone()))>
                        "Mark as Complete"
                    </Button>
                })}
            }
            .into_any()
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Training Videos" />

            <div class="training-layout">
                <div class="card video-player">{player}</div>

                <div class="card playlist">
                    <h3 class="card__title">{TrainingVideo::list_name()}</h3>
                    <div class="playlist__items">
                        <For
                            each=move || course.with(|c| c.videos().to_vec())
                            key=|v| (v.id.clone(), v.progress)
                            children=move |video| {
                                let id = video.id.clone();
                                let id_for_class = video.id.clone();
                                let locked = video.locked;
                                view! {
                                    <div
                                        class="playlist__item"
                                        class:playlist__item--selected=move || course.with(|c| c.is_selected(&id_for_class))
                                        class:playlist__item--locked=locked
                                        on:click=move |_| select(id.clone())
                                    >
                                        <img class="playlist__thumb" src=video.thumbnail_url.clone() alt=video.title.clone() />
                                        <div class="playlist__text">
                                            <h4 class="playlist__title">{video.title.clone()}</h4>
                                            <p class="muted">{video.duration.clone()}</p>
                                            <div class="playlist__status">
                                                {icon(status_icon(&video))}
                                                <span>{video.status_label()}</span>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_icon_matches_state() {
        let videos = mock_training_videos();
        let locked = videos.iter().find(|v| v.locked).unwrap();
        assert_eq!(status_icon(locked), "lock");

        let mut open = videos.iter().find(|v| !v.locked).cloned().unwrap();
        open.progress = COMPLETE;
        assert_eq!(status_icon(&open), "check-circle");
        open.progress = 40;
        assert_eq!(status_icon(&open), "youtube");
    }
}
