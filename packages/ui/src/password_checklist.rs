use api::PasswordCriteria;
use dioxus::prelude::*;

/// Live checklist of the password policy, one line per rule.
#[component]
pub fn PasswordChecklist(password: String) -> Element {
    let criteria = PasswordCriteria::validate(&password);

    rsx! {
        ul {
            class: "password-checklist",
            for (met, label) in criteria.rules() {
                li {
                    key: "{label}",
                    class: if met { "criterion met" } else { "criterion" },
                    span { class: "criterion-mark", if met { "✓" } else { "•" } }
                    "{label}"
                }
            }
        }
    }
}
