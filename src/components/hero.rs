use leptos::prelude::*;

const BANNER: &str =
    "https://images.unsplash.com/photo-1529193591184-b1d580690dd0?q=80&w=2070&auto=format&fit=crop";
const BANNER_FALLBACK: &str =
    "https://images.unsplash.com/photo-1555939594-58d7cb561ad1?q=80&w=1974&auto=format&fit=crop";

/// Landing banner with the two calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    let banner = RwSignal::new(BANNER);

    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop">
                <img
                    src=move || banner.get()
                    alt="Grill Banner"
                    class="hero-image"
                    on:error=move |_| banner.set(BANNER_FALLBACK)
                />
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content">
                <span class="hero-badge">"🔥 ف ثواني طلبك يكون جاهز"</span>
                <h1 class="hero-title">
                    "الطعم " <span class="hero-title-accent">"الأصلي للمـشــويـات"</span>
                </h1>
                <h2 class="hero-subtitle">"أصل المشويات المصرية.. طعم يرجعك للأصول"</h2>
                <p class="hero-text">
                    "نقدم لكم أشهى المشويات المتبلة بخلطاتنا السرية، محضرة بعناية لتناسب ذوقكم الرفيع في أجواء مصرية أصيلة."
                </p>
                <div class="hero-actions">
                    <a href="#menu" class="button button-primary">"شاهد القائمة ↓"</a>
                    <a href="#contact" class="button button-ghost">"تواصل معنا"</a>
                </div>
            </div>

            <a href="#menu" class="hero-scroll" aria-label="Scroll down">"اكتشف المزيد"</a>
        </section>
    }
}
