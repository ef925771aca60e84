use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_element_bounding, UseElementBoundingReturn};

use crate::motion::AnchorRect;

use super::contact::ContactSection;
use super::hero::Hero;
use super::lamp::{HangingLamp, SocialLinks};
use super::road_car::ScrollRoadCar;
use super::sections::{
    AboutSection, EducationSection, ExperienceSection, ProjectsSection, ResumeSection,
    SkillsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let social_ref = NodeRef::<html::Div>::new();
    let UseElementBoundingReturn {
        top, left, width, ..
    } = use_element_bounding(social_ref);
    // zero width means the links are hidden (small screens) or not measured yet
    let anchor = Signal::derive(move || {
        let width = width.get();
        (width > 0.0).then(|| AnchorRect {
            top: top.get(),
            left: left.get(),
            width,
        })
    });

    view! {
        <Title text="Portfolio" />
        <HangingLamp anchor />
        <SocialLinks container=social_ref />
        <ScrollRoadCar />
        <Hero />
        <SectionDivider />
        <AboutSection />
        <SectionDivider />
        <SkillsSection />
        <SectionDivider />
        <ExperienceSection />
        <SectionDivider />
        <EducationSection />
        <SectionDivider />
        <ProjectsSection />
        <SectionDivider />
        <ResumeSection />
        <SectionDivider />
        <ContactSection />
    }
}

#[component]
fn SectionDivider() -> impl IntoView {
    view! { <hr class="mx-auto max-w-6xl border-muted/30" /> }
}
