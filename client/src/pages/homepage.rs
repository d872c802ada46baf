//! Marketing homepage with the feature grid and calls to action.

use leptos::prelude::*;

use crate::components::feature_card::FeatureCard;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="homepage">
            <section class="hero">
                <h1 class="hero__title">"Create professional documents in minutes"</h1>
                <p class="hero__subtitle">
                    "Resumes, invoices, and letters powered by beautiful templates and an AI writing assistant."
                </p>
                <div class="hero__actions">
                    <a href="/templates" class="btn btn--primary">
                        "Browse Templates"
                    </a>
                    <a href="/register" class="btn btn--outline">
                        "Get Started Free"
                    </a>
                </div>
            </section>

            <section class="homepage__features">
                <h2>"Everything you need to get it on paper"</h2>
                <div class="feature-grid">
                    <FeatureCard
                        title="Resume Builder"
                        description="Assemble a polished resume with live preview and reusable sections."
                        href="/resume-builder"
                    />
                    <FeatureCard
                        title="Invoice Builder"
                        description="Itemized invoices with automatic totals, ready to send."
                        href="/invoice-builder"
                    />
                    <FeatureCard
                        title="Letter Builder"
                        description="Formal letters formatted correctly every time."
                        href="/letter-builder"
                    />
                    <FeatureCard
                        title="AI Writer"
                        description="Describe what you need and let the assistant draft it."
                        href="/ai-writer"
                    />
                    <FeatureCard
                        title="Template Marketplace"
                        description="Professional templates from a community of creators."
                        href="/templates"
                    />
                    <FeatureCard
                        title="Creator Studio"
                        description="Publish your own templates and earn on every download."
                        href="/become-creator"
                    />
                </div>
            </section>

            <section class="homepage__cta">
                <h2>"Ready to start?"</h2>
                <p>"Join the DocAi community and ship your next document today."</p>
                <a href="/register" class="btn btn--primary">
                    "Create Your Account"
                </a>
            </section>
        </div>
    }
}
