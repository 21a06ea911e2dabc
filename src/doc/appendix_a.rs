/*!
# Limits and Errors

| Limit | Value |
|-------|-------|
| Program lines | 99 |
| Line numbers | 1 to 65535 |
| Characters per line | 255 |
| Nested `GOSUB` | 26 |
| Pending operands in one expression | 255 |

Errors in a program report the line they happened in.
Errors in a direct statement do not.
```text
Error in line 20: Division by zero
Error: = expected
STOP at line 40
```

| Message | Code |
|---------|------|
| End of statement expected | 1 |
| Invalid factor | 2 |
| Invalid number | 3 |
| Invalid label | 4 |
| Function expected | 5 |
| Variable expected | 6 |
| THEN expected | 7 |
| Program overflow | 8 |
| Invalid line number | 9 |
| Expression too complex | 16 |
| = expected | 20 |
| Line buffer overflow | 23 |
| Line not found | 32 |
| File not found | 53 |
| Unterminated string | 62 |
| RETURN without GOSUB | 133 |
| GOSUB stack overflow | 188 |
| Division by zero | 224 |
| Missing ) | 296 |

*/
