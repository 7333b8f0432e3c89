pub mod mapper_dependency;
