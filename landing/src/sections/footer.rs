use leptos::prelude::*;
use tchapbx_site::SiteConfig;
use tchapbx_site::content::FOOTER_GROUPS;

#[component]
pub fn Footer() -> impl IntoView {
    let brand = expect_context::<SiteConfig>().brand;

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <div class="nav-brand">
                        <div class="nav-logo">
                            <span>{brand.logo_letter}</span>
                        </div>
                        <span class="nav-title">
                            {brand.wordmark}
                            <span class="text-cyan">{brand.wordmark_accent}</span>
                        </span>
                    </div>
                    <p class="footer-tagline">{brand.tagline}</p>
                </div>
                {FOOTER_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="footer-group">
                                <h4 class="footer-heading">{group.title}</h4>
                                <ul class="footer-links">
                                    {group
                                        .links
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <li>
                                                    <a href=link.href class="footer-link">{link.label}</a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="footer-copyright">"© 2025 TchaPBX. All rights reserved."</p>
        </footer>
    }
}
