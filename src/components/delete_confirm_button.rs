//! Delete Confirm Button Component
//!
//! Inline two-step delete for a plate card: the first click asks, naming
//! the plate, the second confirms.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `plate_name` - Name shown in the confirmation prompt
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] plate_name: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = confirm_prompt(&plate_name);
    let title = format!("Delete {}", plate_name.trim());

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                let class = button_class.clone();
                let title = title.clone();
                view! {
                    <button
                        type="button"
                        class=class
                        title=title.clone()
                        aria-label=title
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        "Delete"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}

/// Confirmation text for deleting `plate_name`
fn confirm_prompt(plate_name: &str) -> String {
    match plate_name.trim() {
        "" => "Remove this plate?".to_string(),
        name => format!("Remove \"{}\" from the menu?", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_plate() {
        assert_eq!(confirm_prompt(" Veggie "), "Remove \"Veggie\" from the menu?");
    }

    #[test]
    fn test_prompt_without_name() {
        assert_eq!(confirm_prompt("   "), "Remove this plate?");
    }
}
