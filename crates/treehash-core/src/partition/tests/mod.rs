mod tests_partition;
