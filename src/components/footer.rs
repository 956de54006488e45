use leptos::prelude::*;

use crate::components::icons::glyph;
use crate::models::StorefrontState;

#[component]
pub fn Footer() -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");
    let (name, social_links, contact_info) = state.profile.with_value(|p| {
        (p.name.clone(), p.social_links.clone(), p.contact_info.clone())
    });
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id="contact" class="site-footer">
            <div class="container footer-grid">
                <div class="footer-about">
                    <h2 class="footer-title">"👨‍🍳 " {name.clone()}</h2>
                    <p>
                        "نحن نقدم تجربة طعام فريدة تمزج بين الأصالة والجودة. نستخدم أجود أنواع اللحوم الطازجة والتوابل الطبيعية."
                    </p>
                    <h3 class="footer-label">"تابعنا على"</h3>
                    <div class="social-row">
                        {social_links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="social-link"
                                        aria-label=link.name
                                    >
                                        {glyph(&link.icon)}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="footer-contact">
                    <h3 class="footer-label">"معلومات التواصل"</h3>
                    <ul>
                        {contact_info
                            .into_iter()
                            .map(|info| {
                                let external = info.is_external();
                                view! {
                                    <li>
                                        <a
                                            href=info.href
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            class="contact-link"
                                        >
                                            <span class="contact-icon">{glyph(&info.icon)}</span>
                                            <span class="contact-text">{info.text}</span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>"© " {year} " مطعم " {name} ". جميع الحقوق محفوظة."</p>
                <p>"صنع بكل ❤️ في مصر"</p>
            </div>
        </footer>
    }
}
