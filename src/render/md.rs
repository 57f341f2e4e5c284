use super::RenderView;
use crate::types::Dimension;

pub fn to_markdown(view: &RenderView<'_>, untitled: &str) -> String {
    let title = if view.state.song_name().is_empty() {
        untitled
    } else {
        view.state.song_name()
    };

    let mut output = String::new();
    output.push_str(&format!("# {title}的评分结果\n\n"));
    output.push_str(&format!("平均分数: {}\n\n", view.average));
    output.push_str("| 维度 | id | 评分 | 基准线 |\n");
    output.push_str("|------|----|------|--------|\n");
    let rows = Dimension::ALL
        .iter()
        .zip(view.payload.labels())
        .zip(view.payload.ratings().data.iter().zip(&view.payload.baseline().data));
    for ((dimension, label), (rating, baseline)) in rows {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            label,
            dimension.id(),
            rating,
            baseline
        ));
    }

    output
}
