pub mod portfolio_projects;
