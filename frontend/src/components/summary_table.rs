use shared::summary::WeeklySummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryTableProps {
    pub summary: WeeklySummary,
}

#[function_component(SummaryTable)]
pub fn summary_table(props: &SummaryTableProps) -> Html {
    let summary = &props.summary;

    html! {
        <table class="summary-table">
            <thead>
                <tr>
                    <th>{ "Date" }</th>
                    <th>{ "Number of events" }</th>
                    <th>{ "Total duration [min]" }</th>
                    <th>{ "Longest event" }</th>
                </tr>
            </thead>
            <tbody>
                { for summary.days.iter().map(|day| html! {
                    <tr key={day.date.to_string()}>
                        <td>{ day.date.format("%Y-%m-%d").to_string() }</td>
                        <td>{ day.event_count }</td>
                        <td>{ day.total_duration }</td>
                        <td>{ day.longest_title.clone().unwrap_or_default() }</td>
                    </tr>
                })}
                <tr class="total-row">
                    <td>{ "Total" }</td>
                    <td>{ summary.total.event_count }</td>
                    <td>{ summary.total.total_duration }</td>
                    <td>{ summary.total.longest_title.clone().unwrap_or_default() }</td>
                </tr>
            </tbody>
        </table>
    }
}
