use chrono::{DateTime, NaiveTime, Utc};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};

use crate::state::SiteData;

/// RSS 2.0 feed of the blog. Post dates are day-granular, so pubDate is
/// midnight UTC in RFC 2822 form.
pub fn blog_feed(data: &SiteData, site_url: &str) -> String {
    let site_url = site_url.trim_end_matches('/');
    let config = &data.config;

    let description = if config.hero_subtitle.trim().is_empty() {
        config.shop_name.clone()
    } else {
        config.hero_subtitle.clone()
    };

    let items: Vec<rss::Item> = data
        .blogs
        .iter()
        .map(|post| {
            let link = format!("{}/blog/{}", site_url, post.id);
            let pub_date = post.parsed_date().map(|d| {
                DateTime::<Utc>::from_naive_utc_and_offset(d.and_time(NaiveTime::MIN), Utc)
                    .to_rfc2822()
            });
            ItemBuilder::default()
                .title(Some(post.title.clone()))
                .link(Some(link.clone()))
                .guid(Some(
                    GuidBuilder::default().value(link).permalink(true).build(),
                ))
                .pub_date(pub_date)
                .description(Some(post.excerpt.clone()))
                .author(if post.author.is_empty() {
                    None
                } else {
                    Some(post.author.clone())
                })
                .build()
        })
        .collect();

    ChannelBuilder::default()
        .title(config.shop_name.clone())
        .link(site_url.to_string())
        .description(description)
        .items(items)
        .build()
        .to_string()
}
