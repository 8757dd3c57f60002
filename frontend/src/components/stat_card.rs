use yew::prelude::*;

use super::icons::{icon_category, icon_dollar, icon_trending_up};

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Dollar,
    Category,
    TrendingUp,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub icon: StatIcon,
    pub color: &'static str,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-[rgba(13,19,33,0.7)] p-6 rounded-[10px] shadow-sm border border-white/10 flex flex-col gap-2">
            <div class="flex items-center gap-2 text-white">
                <span style={format!("color: {}", props.color)}>
                    {
                        match props.icon {
                            StatIcon::Dollar => icon_dollar(),
                            StatIcon::Category => icon_category(),
                            StatIcon::TrendingUp => icon_trending_up(),
                        }
                    }
                </span>
                <p class="text-lg font-medium">{ props.title }</p>
            </div>
            <h3 class="text-3xl font-bold tracking-tight" style={format!("color: {}", props.color)}>{ props.value.clone() }</h3>
        </div>
    }
}
