use crate::layout::toast_service::use_toast;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use crate::shared::list_utils::EmptyState;
use chrono::Utc;
use contracts::domain::a003_bonus::aggregate::{claim_bonus, Bonus, BonusStatus, EMPTY_HINT};
use contracts::domain::a003_bonus::seed::mock_bonuses;
use contracts::domain::common::ListView;
use leptos::prelude::*;

/// Date line under a bonus, depending on where it is in its lifecycle
fn date_note(bonus: &Bonus) -> Option<(&'static str, String)> {
    match bonus.status {
        BonusStatus::Available => bonus
            .expiry_date
            .clone()
            .map(|d| ("bonus-card__date", format!("Expires: {}", d))),
        BonusStatus::Claimed => bonus
            .claim_date
            .clone()
            .map(|d| ("bonus-card__date bonus-card__date--claimed", format!("Claimed on: {}", d))),
        BonusStatus::Expired => bonus
            .expiry_date
            .clone()
            .map(|d| ("bonus-card__date bonus-card__date--expired", format!("Expired on: {}", d))),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BonusList() -> impl IntoView {
    let toast = use_toast();
    let bonuses = RwSignal::new(mock_bonuses());

    let view_list = Memo::new(move |_| ListView::for_aggregate(bonuses.get()));

    let claim = move |id: String| {
        let today = Utc::now().date_naive();
        let mut notification = None;
        bonuses.update(|all| notification = claim_bonus(all, &id, today));
        match notification {
            Some(n) => {
                log::info!("bonus {} claimed on {}", id, today);
                toast.notify(n);
            }
            None => log::warn!("bonus {} not found", id),
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Bonuses Dashboard" />

            {move || match view_list.get() {
                ListView::Empty(msg) => view! {
                    <div class="card">
                        <EmptyState message=msg hint=EMPTY_HINT icon_name="gift" />
                    </div>
                }
                .into_any(),
                ListView::Rows(rows) => view! {
                    <div class="card-grid card-grid--3">
                        {rows
                            .into_iter()
                            .map(|bonus| {
                                let id = bonus.id.clone();
                                let note = date_note(&bonus);
                                let claimable = bonus.is_claimable();
                                let status = bonus.status;
                                view! {
                                    <div class="card bonus-card">
                                        <div class="card__header card__header--between">
                                            <h3 class="card__title">
                                                {icon("gift")}
                                                {bonus.title}
                                            </h3>
                                            <Badge variant=status.badge_variant()>{status.as_str()}</Badge>
                                        </div>
                                        <p class="card__subtitle">{bonus.description}</p>
                                        <p><strong>"Requirement: "</strong>{bonus.criteria}</p>
                                        <p><strong>"Reward: "</strong><span class="bonus-card__reward">{bonus.reward}</span></p>
                                        {bonus.progress.map(|p| view! { <p><strong>"Progress: "</strong>{p}</p> })}
                                        {note.map(|(class, text)| view! { <p class=class>{text}</p> })}
                                        <div class="card__footer">
                                            {if claimable {
                                                view! {
                                                    <Button class="button--block" on_click=Callback::new(move |_| claim(id.clone()))>
                                                        "Claim Bonus"
                                                    </Button>
                                                }
                                                .into_any()
                                            } else {
                                                view! {
                                                    <Button class="button--block" disabled=true>
                                                        {status.as_str()}
                                                    </Button>
                                                }
                                                .into_any()
                                            }}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_note_follows_status() {
        let mut bonuses = mock_bonuses();
        let available = bonuses
            .iter()
            .find(|b| b.status == BonusStatus::Available && b.expiry_date.is_some())
            .cloned()
            .unwrap();
        let (_, text) = date_note(&available).unwrap();
        assert!(text.starts_with("Expires: "));

        let today = chrono::NaiveDate::from_ymd_opt(2024, 7, 30).unwrap();
        claim_bonus(&mut bonuses, &available.id, today).unwrap();
        let claimed = bonuses.iter().find(|b| b.id == available.id).unwrap();
        let (class, text) = date_note(claimed).unwrap();
        assert_eq!(text, "Claimed on: 2024-07-30");
        assert!(class.contains("claimed"));
    }
}
