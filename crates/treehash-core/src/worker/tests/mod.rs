mod tests_stream;
